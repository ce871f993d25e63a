//! Unit tests for `syntobj_syntax`.

mod behaviour;
