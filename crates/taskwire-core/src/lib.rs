pub mod definition;
pub mod diagnostics;
pub mod factory;
pub mod models;
pub mod parser;
pub mod registry;
pub mod resolver;
pub mod wiring;

pub use parser::{ParseSummary, ServiceTaskParser, parse_process_document};
pub use resolver::BehaviorResolver;
