//! The fixed source text written by the generator.

/// Minimal C++ program printing `Hello World!`.
///
/// Downstream build steps compile this file as-is, so the text must stay
/// byte-for-byte stable.
pub const HELLO_WORLD_CPP_SOURCE: &str = "#include <iostream>\n\
int main(int, char*[])\n\
{\n    std::cout << \"Hello World!\" << std::endl;\n    return 0;\n}\n";

/// The built-in payload.
pub const HELLO_WORLD_CPP: Payload = Payload::new("hello_world.cpp", HELLO_WORLD_CPP_SOURCE);

/// A named block of constant source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Payload {
    name: &'static str,
    contents: &'static str,
}

impl Payload {
    /// Create a payload from static text.
    pub const fn new(name: &'static str, contents: &'static str) -> Self {
        Self { name, contents }
    }

    /// Short name used in logs.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The text written to the output target.
    pub fn contents(&self) -> &'static str {
        self.contents
    }

    pub fn as_bytes(&self) -> &'static [u8] {
        self.contents.as_bytes()
    }

    pub fn len(&self) -> usize {
        self.contents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contents.is_empty()
    }
}

impl Default for Payload {
    fn default() -> Self {
        HELLO_WORLD_CPP
    }
}
