//! Line templates with `type`, `name` and `size` placeholders

/// Default line template, e.g. `(d) src/` then a tab then `(4.00 KB)`.
pub const DEFAULT_FORMAT: &str = "(type) name\t(size)";

/// A placeholder recognized in a line template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Type,
    Name,
    Size,
}

impl Field {
    const ALL: [Field; 3] = [Field::Type, Field::Name, Field::Size];

    pub fn token(self) -> &'static str {
        match self {
            Field::Type => "type",
            Field::Name => "name",
            Field::Size => "size",
        }
    }

    fn strip_from(s: &str) -> Option<(Field, &str)> {
        Self::ALL
            .iter()
            .find_map(|f| s.strip_prefix(f.token()).map(|rest| (*f, rest)))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Field(Field),
}

/// Values substituted for one rendered line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldValues {
    pub kind: &'static str,
    pub name: String,
    pub size: String,
}

impl FieldValues {
    fn get(&self, field: Field) -> &str {
        match field {
            Field::Type => self.kind,
            Field::Name => &self.name,
            Field::Size => &self.size,
        }
    }
}

/// A parsed line template.
///
/// The template text is scanned once into literal and placeholder segments.
/// Substituted values are never scanned again, so a file called `size.txt`
/// prints as `size.txt`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    segments: Vec<Segment>,
}

impl Template {
    /// Parse a template. The two-character escape `\t` becomes a tab.
    pub fn parse(format: &str) -> Self {
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut rest = format;

        while !rest.is_empty() {
            if let Some(after) = rest.strip_prefix("\\t") {
                literal.push('\t');
                rest = after;
            } else if let Some((field, after)) = Field::strip_from(rest) {
                if !literal.is_empty() {
                    segments.push(Segment::Literal(std::mem::take(&mut literal)));
                }
                segments.push(Segment::Field(field));
                rest = after;
            } else {
                let mut chars = rest.chars();
                if let Some(c) = chars.next() {
                    literal.push(c);
                }
                rest = chars.as_str();
            }
        }
        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        Self { segments }
    }

    pub fn render(&self, values: &FieldValues) -> String {
        let mut line = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => line.push_str(text),
                Segment::Field(field) => line.push_str(values.get(*field)),
            }
        }
        line
    }
}

impl Default for Template {
    fn default() -> Self {
        Self::parse(DEFAULT_FORMAT)
    }
}
