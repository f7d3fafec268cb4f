//! Types representing the tree of a LaTeX document under construction

use std::io::Write;

use crate::language::DocumentError;
use crate::output::{Buffer, Sink, Stream};
use crate::rendering;

/// A single element of the document tree. Every variant knows how to render
/// itself, but the rendering logic lives in one place; see
/// [`crate::rendering`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Node {
    Declaration(Declaration),
    Text(String),
    Container(Container),
    Item(Item),
}

/// A one-line command of the form `\kind[options]{name}`, such as
/// `\documentclass`, `\usepackage`, or `\frametitle`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Declaration {
    kind: String,
    name: String,
    options: Vec<String>,
}

impl Declaration {
    pub fn new(kind: &str, name: &str, options: &[&str]) -> Declaration {
        Declaration {
            kind: kind.to_string(),
            name: name.to_string(),
            options: owned_options(options),
        }
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }
}

/// An environment, rendered as `\begin{tag}` and `\end{tag}` around its
/// children.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Container {
    tag: String,
    options: Vec<String>,
    pub(crate) children: Vec<Node>,
}

impl Container {
    pub fn new(tag: &str, options: &[&str]) -> Container {
        Container {
            tag: tag.to_string(),
            options: owned_options(options),
            children: Vec::new(),
        }
    }

    pub(crate) fn with_options(tag: &str, options: Vec<String>) -> Container {
        Container {
            tag: tag.to_string(),
            options,
            children: Vec::new(),
        }
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }
}

/// A list entry, `\item` with an optional single label.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Item {
    option: Option<String>,
    pub(crate) children: Vec<Node>,
}

impl Item {
    pub fn new(option: Option<&str>) -> Item {
        Item {
            option: option.map(str::to_string),
            children: Vec::new(),
        }
    }

    pub fn option(&self) -> Option<&str> {
        self.option
            .as_deref()
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }
}

/// Where a Document is in its construction. Only moving from `InBody` back
/// to adding packages is forbidden.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Phase {
    Empty,
    ClassSet,
    Importing,
    InBody,
}

/// The root of the tree. The preamble (class and packages) is held apart
/// from the body so that it always renders first regardless of the order
/// the client declared things in.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Document {
    class: Option<Declaration>,
    packages: Vec<Declaration>,
    pub(crate) body: Container,
}

impl Default for Document {
    fn default() -> Self {
        Document::new()
    }
}

impl Document {
    pub fn new() -> Document {
        Document {
            class: None,
            packages: Vec::new(),
            body: Container::new("document", &[]),
        }
    }

    pub fn set_class(&mut self, name: &str, options: &[&str]) -> Result<(), DocumentError> {
        if self
            .class
            .is_some()
        {
            return Err(DocumentError::DuplicateDeclaration {
                name: name.to_string(),
            });
        }
        self.class = Some(Declaration::new("documentclass", name, options));
        Ok(())
    }

    pub fn add_package(&mut self, name: &str, options: &[&str]) -> Result<(), DocumentError> {
        if !self
            .body
            .children
            .is_empty()
        {
            return Err(DocumentError::OrderingViolation {
                package: name.to_string(),
            });
        }
        self.packages
            .push(Declaration::new("usepackage", name, options));
        Ok(())
    }

    pub fn phase(&self) -> Phase {
        if !self
            .body
            .children
            .is_empty()
        {
            Phase::InBody
        } else if !self
            .packages
            .is_empty()
        {
            Phase::Importing
        } else if self
            .class
            .is_some()
        {
            Phase::ClassSet
        } else {
            Phase::Empty
        }
    }

    pub fn class(&self) -> Option<&Declaration> {
        self.class
            .as_ref()
    }

    pub fn packages(&self) -> &[Declaration] {
        &self.packages
    }

    pub fn body(&self) -> &Container {
        &self.body
    }

    /// Render the finished document into a String.
    pub fn render(&self) -> Result<String, DocumentError> {
        let mut buffer = Buffer::new();
        rendering::render(self, &mut buffer)?;
        Ok(buffer.into_string())
    }

    /// Render the finished document directly into a writer. The writer is
    /// not flushed.
    pub fn render_to<W: Write + ?Sized>(&self, writer: &mut W) -> Result<(), DocumentError> {
        let mut stream = Stream::new(writer);
        rendering::render(self, &mut stream)
    }

    pub fn render_into(&self, sink: &mut dyn Sink) -> Result<(), DocumentError> {
        rendering::render(self, sink)
    }
}

pub(crate) fn owned_options(options: &[&str]) -> Vec<String> {
    options
        .iter()
        .map(|option| option.to_string())
        .collect()
}

/// Combine key/value pairs into the single `key=value,key=value` option that
/// environments like `frame` and `lstlisting` expect.
pub fn pairs_to_option(pairs: &[(&str, &str)]) -> String {
    pairs
        .iter()
        .map(|(key, value)| format!("{}={}", key, value))
        .collect::<Vec<_>>()
        .join(",")
}
