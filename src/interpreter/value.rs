/// Struct instance representation.
///
/// Defines `StructValue`, the payload of `Value::Struct`: the struct type's
/// name and its field values in declaration order.
pub mod structure;

/// Core runtime values.
///
/// Defines the `Value` enum, its type tags, and conversion and display
/// helpers shared by every evaluator module.
pub mod core;
