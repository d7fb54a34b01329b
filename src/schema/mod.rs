pub mod code_registry;
pub mod meta;
pub mod model;
pub mod printer;
pub mod resolve_type;
pub mod translate;
