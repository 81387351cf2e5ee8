pub mod diagnostic_tool;
