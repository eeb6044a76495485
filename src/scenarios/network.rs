//! Scenario touching an external service that is expected to be absent.

use std::net::{SocketAddr, TcpStream};
use std::time::Duration;

use crate::error::FaultError;

/// Discard port on loopback; nothing listens there in the environments
/// this runs in.
const UNREACHABLE_ENDPOINT: &str = "127.0.0.1:9";

const CONNECT_TIMEOUT: Duration = Duration::from_millis(250);

/// Attempt a TCP connection to a well-formed address with no listener
/// behind it. The refused (or timed-out) connection is the point; if the
/// connect ever succeeds the stream is released immediately.
pub fn connect_unreachable() -> Result<(), FaultError> {
    let addr: SocketAddr = UNREACHABLE_ENDPOINT
        .parse()
        .map_err(|_| FaultError::InvalidArgument {
            reason: format!("'{UNREACHABLE_ENDPOINT}' is not a socket address"),
        })?;
    let stream = TcpStream::connect_timeout(&addr, CONNECT_TIMEOUT)
        .map_err(|err| FaultError::from_connect(UNREACHABLE_ENDPOINT, err))?;
    drop(stream);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FaultKind;

    #[test]
    fn unreachable_endpoint_reports_unavailable_dependency() {
        let err = connect_unreachable().unwrap_err();
        assert_eq!(err.kind(), FaultKind::DependencyUnavailable);
        assert!(err.to_string().contains(UNREACHABLE_ENDPOINT));
    }
}
