pub mod utils {
    pub mod camera;
    pub mod config;
    pub mod constants;
    pub mod cube;
    pub mod debug_functions;
    pub mod inputs;
    pub mod macros;
    pub mod objects;
    pub mod rotation;
    pub mod sequencer;
    pub mod setup;
    pub mod slice;
}

pub mod plugins {
    pub mod my_plugin;
}
