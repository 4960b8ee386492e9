// Adapters layer: concrete implementations of the domain ports.

pub mod recognizer;

pub use recognizer::{ScriptedRecognizer, StdinRecognizer, UnsupportedRecognizer};
