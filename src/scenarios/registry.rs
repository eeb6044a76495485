//! Dynamic lookup of named units of work.
//!
//! A handler is resolved by name at run time, so a miss is a runtime
//! fault rather than a compile error, and it is classified apart from a
//! missing file on disk.

use std::collections::HashMap;

use crate::error::FaultError;

type Handler = fn(&str) -> String;

/// Fixed table mapping unit names to the code that implements them.
pub struct HandlerRegistry {
    handlers: HashMap<&'static str, Handler>,
}

impl HandlerRegistry {
    pub fn with_builtins() -> Self {
        let mut handlers: HashMap<&'static str, Handler> = HashMap::new();
        handlers.insert("echo", |input| input.to_string());
        handlers.insert("reverse", |input| input.chars().rev().collect());
        handlers.insert("shout", |input| input.to_uppercase());
        HandlerRegistry { handlers }
    }

    /// Resolve a handler by name; a miss is `UnitNotFound`.
    pub fn resolve(&self, name: &str) -> Result<Handler, FaultError> {
        self.handlers
            .get(name)
            .copied()
            .ok_or_else(|| FaultError::UnitNotFound {
                name: name.to_string(),
            })
    }
}

/// Ask the registry for a handler that was never registered.
pub fn resolve_unknown_handler() -> Result<(), FaultError> {
    let registry = HandlerRegistry::with_builtins();
    let handler = registry.resolve("transliterate")?;
    let _ = handler("never reached");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FaultKind;

    #[test]
    fn builtin_handler_resolves_and_runs() {
        let registry = HandlerRegistry::with_builtins();
        let reverse = registry.resolve("reverse").unwrap();
        assert_eq!(reverse("abc"), "cba");
    }

    #[test]
    fn unknown_name_is_unit_not_found() {
        let registry = HandlerRegistry::with_builtins();
        let err = registry.resolve("transliterate").unwrap_err();
        assert_eq!(err.kind(), FaultKind::UnitNotFound);
        assert_ne!(err.kind(), FaultKind::ResourceNotFound);
        assert!(err.to_string().contains("transliterate"));
    }

    #[test]
    fn unknown_handler_scenario_reports_unit_not_found() {
        let err = resolve_unknown_handler().unwrap_err();
        assert_eq!(err.kind(), FaultKind::UnitNotFound);
    }
}
