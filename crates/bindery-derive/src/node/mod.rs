mod aspect;
mod binding;
mod widget;

// pub use all node types
pub use self::aspect::*;
pub use self::binding::*;
pub use self::widget::*;
