//! Built-in detector kinds: the classic content-repository
//! misconfiguration checks. Every kind here goes through the same registry
//! and sweep machinery as externally registered detectors.

pub mod felix_console;
pub mod get_servlet;
pub mod login_status;
pub mod querybuilder;

pub use felix_console::FelixConsoleDetector;
pub use get_servlet::GetServletDetector;
pub use login_status::LoginStatusDetector;
pub use querybuilder::QueryBuilderDetector;

use crate::detect::{Detector, DetectorRegistry};

/// Register every built-in kind. Called once at startup, before any
/// dispatch.
pub fn register_builtins(registry: &DetectorRegistry) {
    registry.register(GetServletDetector::KIND, |_ctx, _base| {
        Ok(Box::new(GetServletDetector) as Box<dyn Detector>)
    });
    registry.register(QueryBuilderDetector::KIND, |_ctx, _base| {
        Ok(Box::new(QueryBuilderDetector) as Box<dyn Detector>)
    });
    registry.register(FelixConsoleDetector::KIND, |_ctx, _base| {
        Ok(Box::new(FelixConsoleDetector) as Box<dyn Detector>)
    });
    registry.register(LoginStatusDetector::KIND, |_ctx, _base| {
        Ok(Box::new(LoginStatusDetector) as Box<dyn Detector>)
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_builtin_kinds_register() {
        let registry = DetectorRegistry::new();
        register_builtins(&registry);
        assert_eq!(
            registry.kinds(),
            vec![
                "felix-console".to_string(),
                "get-servlet".to_string(),
                "login-status".to_string(),
                "querybuilder".to_string(),
            ]
        );
    }
}
