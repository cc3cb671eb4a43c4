//! Test doubles shared by the integration tests.

mod scripted_id_generator;

pub use scripted_id_generator::ScriptedIdGenerator;
