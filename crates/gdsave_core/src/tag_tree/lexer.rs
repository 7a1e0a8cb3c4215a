use crate::error::{TagTreeError, TagTreeErrorKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagKind {
    Open,
    Close,
    /// `<t/>`, `<t />`
    Empty,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tag<'a> {
    pub kind: TagKind,
    pub name: &'a str,
    pub offset: usize,
}

impl Tag<'_> {
    pub fn is(&self, kind: TagKind, name: &str) -> bool {
        self.kind == kind && self.name == name
    }

    pub fn describe(&self) -> String {
        match self.kind {
            TagKind::Open => format!("<{}>", self.name),
            TagKind::Close => format!("</{}>", self.name),
            TagKind::Empty => format!("<{}/>", self.name),
        }
    }
}

/// Splits plaintext into tags and character data. Attributes are skipped,
/// as are the XML declaration and comments.
pub struct Lexer<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(src: &'a str) -> Self {
        Self { src, pos: 0 }
    }

    pub fn offset(&self) -> usize {
        self.pos
    }

    fn rest(&self) -> &'a str {
        &self.src[self.pos..]
    }

    fn error(&self, kind: TagTreeErrorKind) -> TagTreeError {
        TagTreeError::new(self.pos, kind)
    }

    /// Raw character data up to the next `<` (or the end of input).
    pub fn read_text(&mut self) -> &'a str {
        let rest = self.rest();
        let len = rest.find('<').unwrap_or(rest.len());
        self.pos += len;
        &rest[..len]
    }

    /// Whether only whitespace remains.
    pub fn at_end(&self) -> bool {
        self.rest().trim_start().is_empty()
    }

    /// Next tag, skipping whitespace between elements. `None` at end of input.
    pub fn next_tag(&mut self) -> Result<Option<Tag<'a>>, TagTreeError> {
        loop {
            let text = self.read_text();
            if !text.trim().is_empty() {
                return Err(TagTreeError::new(
                    self.pos - text.len(),
                    TagTreeErrorKind::UnexpectedText,
                ));
            }
            if self.rest().is_empty() {
                return Ok(None);
            }
            if let Some(tag) = self.read_tag()? {
                return Ok(Some(tag));
            }
        }
    }

    /// Reads one `<...>` construct at the cursor. Declarations and comments
    /// yield `None`.
    fn read_tag(&mut self) -> Result<Option<Tag<'a>>, TagTreeError> {
        let start = self.pos;
        let rest = self.rest();

        if rest.starts_with("<!--") {
            let end = rest
                .find("-->")
                .ok_or_else(|| self.error(TagTreeErrorKind::UnexpectedEof))?;
            self.pos += end + 3;
            return Ok(None);
        }
        if rest.starts_with("<?") {
            let end = rest
                .find("?>")
                .ok_or_else(|| self.error(TagTreeErrorKind::UnexpectedEof))?;
            self.pos += end + 2;
            return Ok(None);
        }

        let end = rest
            .find('>')
            .ok_or_else(|| self.error(TagTreeErrorKind::MalformedTag))?;
        let inner = &rest[1..end];
        self.pos += end + 1;

        if inner.starts_with('!') {
            return Ok(None);
        }

        let (kind, body) = if let Some(body) = inner.strip_prefix('/') {
            (TagKind::Close, body)
        } else if let Some(body) = inner.trim_end().strip_suffix('/') {
            (TagKind::Empty, body)
        } else {
            (TagKind::Open, inner)
        };

        let name = body
            .split(|c: char| c.is_ascii_whitespace())
            .find(|s| !s.is_empty())
            .ok_or_else(|| TagTreeError::new(start, TagTreeErrorKind::MalformedTag))?;

        Ok(Some(Tag {
            kind,
            name,
            offset: start,
        }))
    }
}
