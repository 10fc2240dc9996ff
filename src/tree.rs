use indexmap::IndexMap;
use serde::de::{self, Deserialize, Deserializer, MapAccess, Unexpected, Visitor};
use std::fmt;

/// The content associated with one entry of a [`Tree`].
///
/// Which variants are valid depends on the entry's name: names ending with a path
/// separator describe directories and take [`Content::Empty`] or [`Content::Nested`],
/// every other name describes a file and takes [`Content::Empty`] or [`Content::Text`].
/// A mismatch is reported when the tree is materialized, not when it is built.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Content {
    /// An empty directory or a zero-byte file.
    #[default]
    Empty,
    /// The children of a directory.
    Nested(Tree),
    /// The bytes of a file.
    Text(String),
}
impl Content {
    pub fn kind(&self) -> ContentKind {
        match self {
            Self::Empty => ContentKind::Empty,
            Self::Nested(_) => ContentKind::Tree,
            Self::Text(_) => ContentKind::Text,
        }
    }
}
impl From<&str> for Content {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}
impl From<String> for Content {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}
impl From<Tree> for Content {
    fn from(value: Tree) -> Self {
        Self::Nested(value)
    }
}
impl From<()> for Content {
    fn from(_: ()) -> Self {
        Self::Empty
    }
}
impl<T: Into<Content>> From<Option<T>> for Content {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or_default()
    }
}

/// Descriptive type of a [`Content`], used when reporting mismatches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentKind {
    Empty,
    Text,
    Tree,
}
impl ContentKind {
    fn as_str(&self) -> &str {
        match self {
            Self::Empty => "empty",
            Self::Text => "text",
            Self::Tree => "a nested tree",
        }
    }
}
impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A nested description of directories and files, keyed by entry name.
///
/// ```
/// use pop::{Content, Tree};
///
/// let tree = Tree::new()
///     .with("x.txt", ())
///     .with("a/", Tree::new().with("b.txt", "hello").with("c/", ()));
///
/// assert_eq!(tree.len(), 2);
/// assert_eq!(tree.get("x.txt"), Some(&Content::Empty));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Tree(IndexMap<String, Content>);
impl Tree {
    pub fn new() -> Self {
        Self(IndexMap::new())
    }
    /// Adds an entry and returns the tree, for building fixtures inline.
    pub fn with(mut self, name: impl Into<String>, content: impl Into<Content>) -> Self {
        self.insert(name, content);
        self
    }
    /// Adds an entry, returning the content previously stored under `name`.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        content: impl Into<Content>,
    ) -> Option<Content> {
        self.0.insert(name.into(), content.into())
    }
    pub fn get(&self, name: &str) -> Option<&Content> {
        self.0.get(name)
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Content)> {
        self.0.iter()
    }
}
impl<K, C> FromIterator<(K, C)> for Tree
where
    K: Into<String>,
    C: Into<Content>,
{
    fn from_iter<I: IntoIterator<Item = (K, C)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(name, content)| (name.into(), content.into()))
                .collect(),
        )
    }
}
impl<'a> IntoIterator for &'a Tree {
    type Item = (&'a String, &'a Content);
    type IntoIter = indexmap::map::Iter<'a, String, Content>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<'de> Deserialize<'de> for Tree {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        IndexMap::<String, Content>::deserialize(deserializer).map(Self)
    }
}

/// Key under which the `toml` deserializer hands datetimes to a visitor as a map.
const TOML_DATETIME_KEY: &str = "$__toml_private_datetime";

struct ContentVisitor;
impl<'de> Visitor<'de> for ContentVisitor {
    type Value = Content;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a text payload, a nested tree, or nothing")
    }

    fn visit_unit<E: de::Error>(self) -> Result<Content, E> {
        Ok(Content::Empty)
    }

    fn visit_none<E: de::Error>(self) -> Result<Content, E> {
        Ok(Content::Empty)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Content, D::Error> {
        deserializer.deserialize_any(self)
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Content, E> {
        Ok(Content::Text(value.to_string()))
    }

    fn visit_string<E: de::Error>(self, value: String) -> Result<Content, E> {
        Ok(Content::Text(value))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Content, A::Error> {
        let mut children = IndexMap::with_capacity(map.size_hint().unwrap_or(0));
        while let Some(name) = map.next_key::<String>()? {
            if name == TOML_DATETIME_KEY {
                return Err(de::Error::invalid_type(Unexpected::Other("datetime"), &self));
            }
            let content = map.next_value::<Content>()?;
            children.insert(name, content);
        }
        Ok(Content::Nested(Tree(children)))
    }
}

impl<'de> Deserialize<'de> for Content {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(ContentVisitor)
    }
}
