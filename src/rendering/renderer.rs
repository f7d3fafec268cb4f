//! Writer turning Nodes into indented markup lines

use std::io;

use tracing::debug;

use crate::language::*;
use crate::output::Sink;

/// Each level of nesting indents its lines by this much.
pub const INDENT: &str = "  ";

const BEGIN: &str = "\\begin";
const END: &str = "\\end";
const ITEM: &str = "\\item";

/// Render a complete Document into the given sink. The class declaration is
/// checked before anything is written, so a failing document leaves the
/// sink untouched.
pub fn render(document: &Document, sink: &mut dyn Sink) -> Result<(), DocumentError> {
    let class = document
        .class()
        .ok_or(DocumentError::MissingDeclaration)?;

    debug!(
        "Rendering document with {} package{} and {} body node{}",
        document
            .packages()
            .len(),
        if document
            .packages()
            .len()
            == 1
        {
            ""
        } else {
            "s"
        },
        document
            .body()
            .children()
            .len(),
        if document
            .body()
            .children()
            .len()
            == 1
        {
            ""
        } else {
            "s"
        }
    );

    let mut output = Renderer::new(sink);

    output.render_declaration(class)?;
    for package in document.packages() {
        output.render_declaration(package)?;
    }

    // the document environment is the only one not followed by a newline
    output.render_container(document.body(), false)?;

    Ok(())
}

/// Render a single Node (and everything beneath it) at the outermost
/// indentation level.
pub fn render_node(node: &Node, sink: &mut dyn Sink) -> io::Result<()> {
    let mut output = Renderer::new(sink);
    output.render_node(node)
}

/// Present options as `[one,two,three]`, or as nothing at all if there
/// aren't any. Order is preserved and nothing is trimmed or deduplicated.
pub fn format_options<S: AsRef<str>>(options: &[S]) -> String {
    if options.is_empty() {
        return String::new();
    }

    let mut result = String::from("[");
    for (i, option) in options
        .iter()
        .enumerate()
    {
        if i > 0 {
            result.push(',');
        }
        result.push_str(option.as_ref());
    }
    result.push(']');
    result
}

struct Renderer<'s> {
    sink: &'s mut dyn Sink,
    nesting: usize,
}

impl<'s> Renderer<'s> {
    fn new(sink: &'s mut dyn Sink) -> Renderer<'s> {
        Renderer { sink, nesting: 0 }
    }

    fn append(&mut self, content: &str) -> io::Result<()> {
        self.sink
            .append(content)
    }

    fn increase(&mut self) {
        self.nesting += 1;
    }

    fn decrease(&mut self) {
        self.nesting -= 1;
    }

    fn indent(&mut self) -> io::Result<()> {
        if self.nesting > 0 {
            let spaces = INDENT.repeat(self.nesting);
            self.append(&spaces)?;
        }
        Ok(())
    }

    fn render_node(&mut self, node: &Node) -> io::Result<()> {
        match node {
            Node::Declaration(declaration) => self.render_declaration(declaration),
            Node::Text(text) => self.render_text(text),
            Node::Container(container) => self.render_container(container, true),
            Node::Item(item) => self.render_item(item),
        }
    }

    fn render_children(&mut self, children: &[Node]) -> io::Result<()> {
        self.increase();
        for child in children {
            self.render_node(child)?;
        }
        self.decrease();
        Ok(())
    }

    fn render_declaration(&mut self, declaration: &Declaration) -> io::Result<()> {
        self.indent()?;
        self.append("\\")?;
        self.append(declaration.kind())?;
        self.append(&format_options(declaration.options()))?;
        self.append("{")?;
        self.append(declaration.name())?;
        self.append("}\n")
    }

    fn render_text(&mut self, text: &str) -> io::Result<()> {
        self.indent()?;
        self.append(text)?;
        self.append("\n")
    }

    fn render_container(&mut self, container: &Container, inner: bool) -> io::Result<()> {
        self.indent()?;
        self.append(BEGIN)?;
        self.append("{")?;
        self.append(container.tag())?;
        self.append("}")?;
        self.append(&format_options(container.options()))?;
        self.append("\n")?;

        self.render_children(container.children())?;

        self.indent()?;
        self.append(END)?;
        self.append("{")?;
        self.append(container.tag())?;
        self.append("}")?;
        if inner {
            self.append("\n")?;
        }
        Ok(())
    }

    fn render_item(&mut self, item: &Item) -> io::Result<()> {
        self.indent()?;
        self.append(ITEM)?;
        if let Some(option) = item.option() {
            self.append(&format_options(&[option]))?;
        }
        self.append("\n")?;

        self.render_children(item.children())
    }
}
