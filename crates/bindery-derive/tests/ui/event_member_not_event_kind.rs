use bindery::prelude::*;

#[widget]
#[derive(Clone, Debug, Default)]
pub struct Broken {
    #[event]
    pub on_change: String,
}

fn main() {}
