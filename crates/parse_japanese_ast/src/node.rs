//! NLCST node definitions.
//!
//! Parents are distinct structs whose children are closed enums, so a
//! tree can only nest the way NLCST does:
//!
//! - [`Root`] holds [`Paragraph`]s
//! - [`Paragraph`] holds [`Sentence`]s and line-break whitespace
//! - [`Sentence`] holds [`Word`]s and whitespace
//! - [`Word`] holds text, punctuation, and inline whitespace leaves
//!
//! Leaves share one [`Leaf`] struct; the node type comes from the enum
//! variant that wraps it.

use serde::ser::{Serialize, SerializeStruct, Serializer};

use crate::{NodeType, Position, Token};

/// Common behavior of every node in the tree.
pub trait Node {
    /// Returns the type tag of this node.
    fn node_type(&self) -> NodeType;

    /// Returns the source position, if tracked.
    fn position(&self) -> Option<&Position>;

    /// Returns the value of a leaf node.
    fn value(&self) -> Option<&str> {
        None
    }

    /// Returns the number of direct children.
    fn child_count(&self) -> usize {
        0
    }

    /// Appends the concatenated leaf values of this node to `out`.
    fn write_text(&self, out: &mut String);

    /// Returns the concatenated leaf values of this node in document order.
    fn to_text(&self) -> String {
        let mut out = String::new();
        self.write_text(&mut out);
        out
    }
}

/// A node that owns an ordered sequence of children.
pub trait ParentNode: Node {
    /// The closed set of nodes this parent may contain.
    type Child: Node;

    /// Returns the children in reading order.
    fn children(&self) -> &[Self::Child];

    /// Appends `child` and stretches this node's position over its children.
    ///
    /// After every attach, `position.start` is the first child's start and
    /// `position.end` is the attached child's end. Nothing is recomputed
    /// when either child is untracked.
    fn attach(&mut self, child: Self::Child);

    /// Returns true if no child has been attached yet.
    fn is_empty(&self) -> bool {
        self.children().is_empty()
    }
}

fn attach_child<C: Node>(children: &mut Vec<C>, position: &mut Option<Position>, child: C) {
    let end = child.position().map(|p| p.end);
    children.push(child);

    let start = children.first().and_then(|c| c.position()).map(|p| p.start);
    if let (Some(start), Some(end)) = (start, end) {
        *position = Some(Position::new(start, end));
    }
}

/// A leaf node holding a piece of source text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Leaf {
    /// The source text of this leaf.
    pub value: String,
    /// Source position, when position tracking is enabled.
    pub position: Option<Position>,
    /// Raw tokenizer record, when metadata capture is enabled.
    pub data: Option<Token>,
}

impl Leaf {
    /// Creates a leaf with no position or metadata.
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            position: None,
            data: None,
        }
    }

    /// Sets the position of this leaf.
    pub fn with_position(mut self, position: Position) -> Self {
        self.position = Some(position);
        self
    }

    /// Sets the token record of this leaf.
    pub fn with_data(mut self, data: Token) -> Self {
        self.data = Some(data);
        self
    }
}

/// Child of a [`Word`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordChild {
    Text(Leaf),
    Punctuation(Leaf),
    WhiteSpace(Leaf),
}

impl WordChild {
    /// Returns the wrapped leaf.
    pub fn leaf(&self) -> &Leaf {
        match self {
            WordChild::Text(leaf) | WordChild::Punctuation(leaf) | WordChild::WhiteSpace(leaf) => {
                leaf
            }
        }
    }
}

/// Child of a [`Sentence`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SentenceChild {
    Word(Word),
    WhiteSpace(Leaf),
}

impl SentenceChild {
    /// Returns the word, if this child is one.
    pub fn as_word(&self) -> Option<&Word> {
        match self {
            SentenceChild::Word(word) => Some(word),
            SentenceChild::WhiteSpace(_) => None,
        }
    }
}

/// Child of a [`Paragraph`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParagraphChild {
    Sentence(Sentence),
    WhiteSpace(Leaf),
}

impl ParagraphChild {
    /// Returns the sentence, if this child is one.
    pub fn as_sentence(&self) -> Option<&Sentence> {
        match self {
            ParagraphChild::Sentence(sentence) => Some(sentence),
            ParagraphChild::WhiteSpace(_) => None,
        }
    }
}

/// A run of tokens not separated by top-level whitespace.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Word {
    pub children: Vec<WordChild>,
    pub position: Option<Position>,
}

/// A sentence inside a paragraph.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sentence {
    pub children: Vec<SentenceChild>,
    pub position: Option<Position>,
}

impl Sentence {
    /// Returns the words of this sentence, skipping whitespace.
    pub fn words(&self) -> impl Iterator<Item = &Word> {
        self.children.iter().filter_map(SentenceChild::as_word)
    }
}

/// A paragraph built from one physical line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Paragraph {
    pub children: Vec<ParagraphChild>,
    pub position: Option<Position>,
}

impl Paragraph {
    /// Returns the sentences of this paragraph, skipping line breaks.
    pub fn sentences(&self) -> impl Iterator<Item = &Sentence> {
        self.children.iter().filter_map(ParagraphChild::as_sentence)
    }
}

/// The root of a parsed document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Root {
    pub children: Vec<Paragraph>,
    pub position: Option<Position>,
}

impl Root {
    /// Returns every sentence of the document in reading order.
    pub fn sentences(&self) -> impl Iterator<Item = &Sentence> {
        self.children.iter().flat_map(Paragraph::sentences)
    }
}

impl Node for WordChild {
    fn node_type(&self) -> NodeType {
        match self {
            WordChild::Text(_) => NodeType::Text,
            WordChild::Punctuation(_) => NodeType::Punctuation,
            WordChild::WhiteSpace(_) => NodeType::WhiteSpace,
        }
    }

    fn position(&self) -> Option<&Position> {
        self.leaf().position.as_ref()
    }

    fn value(&self) -> Option<&str> {
        Some(&self.leaf().value)
    }

    fn write_text(&self, out: &mut String) {
        out.push_str(&self.leaf().value);
    }
}

impl Node for SentenceChild {
    fn node_type(&self) -> NodeType {
        match self {
            SentenceChild::Word(_) => NodeType::Word,
            SentenceChild::WhiteSpace(_) => NodeType::WhiteSpace,
        }
    }

    fn position(&self) -> Option<&Position> {
        match self {
            SentenceChild::Word(word) => word.position(),
            SentenceChild::WhiteSpace(leaf) => leaf.position.as_ref(),
        }
    }

    fn value(&self) -> Option<&str> {
        match self {
            SentenceChild::Word(_) => None,
            SentenceChild::WhiteSpace(leaf) => Some(&leaf.value),
        }
    }

    fn child_count(&self) -> usize {
        match self {
            SentenceChild::Word(word) => word.child_count(),
            SentenceChild::WhiteSpace(_) => 0,
        }
    }

    fn write_text(&self, out: &mut String) {
        match self {
            SentenceChild::Word(word) => word.write_text(out),
            SentenceChild::WhiteSpace(leaf) => out.push_str(&leaf.value),
        }
    }
}

impl Node for ParagraphChild {
    fn node_type(&self) -> NodeType {
        match self {
            ParagraphChild::Sentence(_) => NodeType::Sentence,
            ParagraphChild::WhiteSpace(_) => NodeType::WhiteSpace,
        }
    }

    fn position(&self) -> Option<&Position> {
        match self {
            ParagraphChild::Sentence(sentence) => sentence.position(),
            ParagraphChild::WhiteSpace(leaf) => leaf.position.as_ref(),
        }
    }

    fn value(&self) -> Option<&str> {
        match self {
            ParagraphChild::Sentence(_) => None,
            ParagraphChild::WhiteSpace(leaf) => Some(&leaf.value),
        }
    }

    fn child_count(&self) -> usize {
        match self {
            ParagraphChild::Sentence(sentence) => sentence.child_count(),
            ParagraphChild::WhiteSpace(_) => 0,
        }
    }

    fn write_text(&self, out: &mut String) {
        match self {
            ParagraphChild::Sentence(sentence) => sentence.write_text(out),
            ParagraphChild::WhiteSpace(leaf) => out.push_str(&leaf.value),
        }
    }
}

impl Node for Word {
    fn node_type(&self) -> NodeType {
        NodeType::Word
    }

    fn position(&self) -> Option<&Position> {
        self.position.as_ref()
    }

    fn child_count(&self) -> usize {
        self.children.len()
    }

    fn write_text(&self, out: &mut String) {
        self.children.iter().for_each(|c| c.write_text(out));
    }
}

impl ParentNode for Word {
    type Child = WordChild;

    fn children(&self) -> &[WordChild] {
        &self.children
    }

    fn attach(&mut self, child: WordChild) {
        attach_child(&mut self.children, &mut self.position, child);
    }
}

impl Node for Sentence {
    fn node_type(&self) -> NodeType {
        NodeType::Sentence
    }

    fn position(&self) -> Option<&Position> {
        self.position.as_ref()
    }

    fn child_count(&self) -> usize {
        self.children.len()
    }

    fn write_text(&self, out: &mut String) {
        self.children.iter().for_each(|c| c.write_text(out));
    }
}

impl ParentNode for Sentence {
    type Child = SentenceChild;

    fn children(&self) -> &[SentenceChild] {
        &self.children
    }

    fn attach(&mut self, child: SentenceChild) {
        attach_child(&mut self.children, &mut self.position, child);
    }
}

impl Node for Paragraph {
    fn node_type(&self) -> NodeType {
        NodeType::Paragraph
    }

    fn position(&self) -> Option<&Position> {
        self.position.as_ref()
    }

    fn child_count(&self) -> usize {
        self.children.len()
    }

    fn write_text(&self, out: &mut String) {
        self.children.iter().for_each(|c| c.write_text(out));
    }
}

impl ParentNode for Paragraph {
    type Child = ParagraphChild;

    fn children(&self) -> &[ParagraphChild] {
        &self.children
    }

    fn attach(&mut self, child: ParagraphChild) {
        attach_child(&mut self.children, &mut self.position, child);
    }
}

impl Node for Root {
    fn node_type(&self) -> NodeType {
        NodeType::Root
    }

    fn position(&self) -> Option<&Position> {
        self.position.as_ref()
    }

    fn child_count(&self) -> usize {
        self.children.len()
    }

    fn write_text(&self, out: &mut String) {
        self.children.iter().for_each(|c| c.write_text(out));
    }
}

impl ParentNode for Root {
    type Child = Paragraph;

    fn children(&self) -> &[Paragraph] {
        &self.children
    }

    fn attach(&mut self, child: Paragraph) {
        attach_child(&mut self.children, &mut self.position, child);
    }
}

fn serialize_parent<S, C>(
    serializer: S,
    node_type: NodeType,
    children: &[C],
    position: Option<&Position>,
) -> Result<S::Ok, S::Error>
where
    S: Serializer,
    C: Serialize,
{
    let len = if position.is_some() { 3 } else { 2 };
    let mut state = serializer.serialize_struct("Parent", len)?;

    state.serialize_field("type", &node_type)?;
    state.serialize_field("children", children)?;
    match position {
        Some(position) => state.serialize_field("position", position)?,
        None => state.skip_field("position")?,
    }

    state.end()
}

fn serialize_leaf<S: Serializer>(
    serializer: S,
    node_type: NodeType,
    leaf: &Leaf,
) -> Result<S::Ok, S::Error> {
    let mut len = 2; // type, value
    if leaf.position.is_some() {
        len += 1;
    }
    if leaf.data.is_some() {
        len += 1;
    }

    let mut state = serializer.serialize_struct("Leaf", len)?;

    state.serialize_field("type", &node_type)?;
    state.serialize_field("value", &leaf.value)?;
    match &leaf.position {
        Some(position) => state.serialize_field("position", position)?,
        None => state.skip_field("position")?,
    }
    match &leaf.data {
        Some(data) => state.serialize_field("data", data)?,
        None => state.skip_field("data")?,
    }

    state.end()
}

impl Serialize for WordChild {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize_leaf(serializer, self.node_type(), self.leaf())
    }
}

impl Serialize for SentenceChild {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            SentenceChild::Word(word) => word.serialize(serializer),
            SentenceChild::WhiteSpace(leaf) => {
                serialize_leaf(serializer, NodeType::WhiteSpace, leaf)
            }
        }
    }
}

impl Serialize for ParagraphChild {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ParagraphChild::Sentence(sentence) => sentence.serialize(serializer),
            ParagraphChild::WhiteSpace(leaf) => {
                serialize_leaf(serializer, NodeType::WhiteSpace, leaf)
            }
        }
    }
}

impl Serialize for Word {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize_parent(serializer, NodeType::Word, &self.children, self.position())
    }
}

impl Serialize for Sentence {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize_parent(serializer, NodeType::Sentence, &self.children, self.position())
    }
}

impl Serialize for Paragraph {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize_parent(serializer, NodeType::Paragraph, &self.children, self.position())
    }
}

impl Serialize for Root {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize_parent(serializer, NodeType::Root, &self.children, self.position())
    }
}
