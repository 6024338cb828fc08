/// Integer payload carried by a list node.
pub type Value = i64;
