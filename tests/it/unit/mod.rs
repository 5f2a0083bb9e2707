//! Controller API surface and snapshot tests.
