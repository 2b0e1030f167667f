pub mod event_assert;
pub mod property_access;
pub mod widget_kind;
