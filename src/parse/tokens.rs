use crate::error::ShellError;

/// Characters that separate words inside a statement.
pub const DELIMITERS: [char; 5] = [' ', '\t', '\n', '\r', '\x07'];

/// Number of token slots added each time storage runs out.
pub const TOKEN_CHUNK: usize = 64;

/// Argument vector of one statement. Never contains an empty word.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tokens {
    items: Vec<String>,
}

impl Tokens {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The word at `index`; `None` at and past `len()`.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.items.get(index).map(String::as_str)
    }

    pub fn program(&self) -> Option<&str> {
        self.get(0)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.items
    }
}

/// Splits a statement on runs of [`DELIMITERS`].
///
/// Storage grows [`TOKEN_CHUNK`] slots at a time. A failed reservation is
/// reported as [`ShellError::Allocation`] instead of truncating the vector;
/// callers treat it as fatal.
pub fn tokenize(statement: &str) -> Result<Tokens, ShellError> {
    let mut items: Vec<String> = Vec::new();
    items.try_reserve_exact(TOKEN_CHUNK)?;

    let words = statement
        .split(|c: char| DELIMITERS.contains(&c))
        .filter(|w| !w.is_empty());

    for word in words {
        if items.len() == items.capacity() {
            items.try_reserve_exact(TOKEN_CHUNK)?;
        }
        items.push(word.to_owned());
    }

    Ok(Tokens { items })
}
