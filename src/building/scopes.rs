use tracing::debug;

use crate::language::*;

/// Anything that can have lines of text appended to it.
pub trait Scope {
    /// The children of the currently open container.
    fn children(&mut self) -> &mut Vec<Node>;

    /// Append a line of literal text.
    fn text(&mut self, text: &str) {
        self.children()
            .push(Node::Text(text.to_string()));
    }
}

/// Scopes able to contain nested environments.
pub trait Body: Scope {
    fn itemize<F>(&mut self, options: &[&str], build: F) -> Result<(), DocumentError>
    where
        F: FnOnce(&mut ListScope<'_>) -> Result<(), DocumentError>,
    {
        open_list(self.children(), Container::new("itemize", options), build)
    }

    fn enumerate<F>(&mut self, options: &[&str], build: F) -> Result<(), DocumentError>
    where
        F: FnOnce(&mut ListScope<'_>) -> Result<(), DocumentError>,
    {
        open_list(self.children(), Container::new("enumerate", options), build)
    }

    fn math<F>(&mut self, build: F) -> Result<(), DocumentError>
    where
        F: FnOnce(&mut BlockScope<'_>) -> Result<(), DocumentError>,
    {
        open_block(self.children(), Container::new("math", &[]), build)
    }

    fn flush_left<F>(&mut self, build: F) -> Result<(), DocumentError>
    where
        F: FnOnce(&mut BlockScope<'_>) -> Result<(), DocumentError>,
    {
        open_block(self.children(), Container::new("flushleft", &[]), build)
    }

    fn flush_right<F>(&mut self, build: F) -> Result<(), DocumentError>
    where
        F: FnOnce(&mut BlockScope<'_>) -> Result<(), DocumentError>,
    {
        open_block(self.children(), Container::new("flushright", &[]), build)
    }

    fn center<F>(&mut self, build: F) -> Result<(), DocumentError>
    where
        F: FnOnce(&mut BlockScope<'_>) -> Result<(), DocumentError>,
    {
        open_block(self.children(), Container::new("center", &[]), build)
    }

    /// An arbitrarily named environment, `\begin{name}[options]`.
    fn environment<F>(&mut self, name: &str, options: &[&str], build: F) -> Result<(), DocumentError>
    where
        F: FnOnce(&mut BlockScope<'_>) -> Result<(), DocumentError>,
    {
        open_block(self.children(), Container::new(name, options), build)
    }

    /// As [`Body::environment`], but with `key=value` options.
    fn environment_pairs<F>(
        &mut self,
        name: &str,
        pairs: &[(&str, &str)],
        build: F,
    ) -> Result<(), DocumentError>
    where
        F: FnOnce(&mut BlockScope<'_>) -> Result<(), DocumentError>,
    {
        let container = Container::with_options(name, paired(pairs));
        open_block(self.children(), container, build)
    }

    /// A Beamer slide. If a title is given it is emitted as `\frametitle`
    /// ahead of anything else in the frame.
    fn frame<F>(&mut self, title: Option<&str>, options: &[&str], build: F) -> Result<(), DocumentError>
    where
        F: FnOnce(&mut BlockScope<'_>) -> Result<(), DocumentError>,
    {
        let container = titled(Container::new("frame", options), title);
        open_block(self.children(), container, build)
    }

    fn frame_pairs<F>(
        &mut self,
        title: Option<&str>,
        pairs: &[(&str, &str)],
        build: F,
    ) -> Result<(), DocumentError>
    where
        F: FnOnce(&mut BlockScope<'_>) -> Result<(), DocumentError>,
    {
        let container = titled(Container::with_options("frame", paired(pairs)), title);
        open_block(self.children(), container, build)
    }
}

/// The outermost scope, the only one where the preamble can be declared.
pub struct DocumentScope<'d> {
    document: &'d mut Document,
}

impl<'d> DocumentScope<'d> {
    pub(crate) fn new(document: &'d mut Document) -> DocumentScope<'d> {
        DocumentScope { document }
    }

    pub fn document_class(&mut self, name: &str, options: &[&str]) -> Result<(), DocumentError> {
        self.document
            .set_class(name, options)
    }

    pub fn use_package(&mut self, name: &str, options: &[&str]) -> Result<(), DocumentError> {
        self.document
            .add_package(name, options)
    }

    pub fn phase(&self) -> Phase {
        self.document
            .phase()
    }
}

impl Scope for DocumentScope<'_> {
    fn children(&mut self) -> &mut Vec<Node> {
        &mut self
            .document
            .body
            .children
    }
}

impl Body for DocumentScope<'_> {}

/// Inside an ordinary environment.
pub struct BlockScope<'c> {
    container: &'c mut Container,
}

impl Scope for BlockScope<'_> {
    fn children(&mut self) -> &mut Vec<Node> {
        &mut self
            .container
            .children
    }
}

impl Body for BlockScope<'_> {}

/// Inside `itemize` or `enumerate`.
pub struct ListScope<'c> {
    container: &'c mut Container,
}

impl ListScope<'_> {
    /// Add an `\item`, optionally with a label such as `[1]` or `[--]`.
    pub fn item<F>(&mut self, option: Option<&str>, build: F) -> Result<(), DocumentError>
    where
        F: FnOnce(&mut ItemScope<'_>) -> Result<(), DocumentError>,
    {
        let mut item = Item::new(option);

        build(&mut ItemScope { item: &mut item })?;

        self.container
            .children
            .push(Node::Item(item));
        Ok(())
    }
}

impl Scope for ListScope<'_> {
    fn children(&mut self) -> &mut Vec<Node> {
        &mut self
            .container
            .children
    }
}

impl Body for ListScope<'_> {}

/// The content of a single list item.
pub struct ItemScope<'i> {
    item: &'i mut Item,
}

impl Scope for ItemScope<'_> {
    fn children(&mut self) -> &mut Vec<Node> {
        &mut self
            .item
            .children
    }
}

impl Body for ItemScope<'_> {}

fn open_block<F>(children: &mut Vec<Node>, mut container: Container, build: F) -> Result<(), DocumentError>
where
    F: FnOnce(&mut BlockScope<'_>) -> Result<(), DocumentError>,
{
    debug!("Opening {} environment", container.tag());

    build(&mut BlockScope {
        container: &mut container,
    })?;

    children.push(Node::Container(container));
    Ok(())
}

fn open_list<F>(children: &mut Vec<Node>, mut container: Container, build: F) -> Result<(), DocumentError>
where
    F: FnOnce(&mut ListScope<'_>) -> Result<(), DocumentError>,
{
    debug!("Opening {} list", container.tag());

    build(&mut ListScope {
        container: &mut container,
    })?;

    children.push(Node::Container(container));
    Ok(())
}

fn paired(pairs: &[(&str, &str)]) -> Vec<String> {
    if pairs.is_empty() {
        Vec::new()
    } else {
        vec![pairs_to_option(pairs)]
    }
}

fn titled(mut container: Container, title: Option<&str>) -> Container {
    if let Some(title) = title {
        container
            .children
            .push(Node::Declaration(Declaration::new("frametitle", title, &[])));
    }
    container
}
