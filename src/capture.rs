use std::fmt;

/// One element of a [`Capture`]: either a text fragment or a nested capture
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Fragment {
    Text(String),
    Group(Capture),
}

impl From<&str> for Fragment {
    fn from(text: &str) -> Self {
        Fragment::Text(text.to_owned())
    }
}

impl From<String> for Fragment {
    fn from(text: String) -> Self {
        Fragment::Text(text)
    }
}

impl From<Capture> for Fragment {
    fn from(capture: Capture) -> Self {
        Fragment::Group(capture)
    }
}

/// The text recognised by a successful match
///
/// An ordered, recursively nested sequence whose leaves are text fragments.
/// Combinators nest child captures by default; a parser in join mode flattens
/// its capture into a single text fragment.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Capture {
    fragments: Vec<Fragment>,
}

impl Capture {
    pub fn new() -> Self {
        Capture::default()
    }

    /// A capture holding a single text fragment
    pub fn text(text: impl Into<String>) -> Self {
        Capture {
            fragments: vec![Fragment::Text(text.into())],
        }
    }

    /// A capture holding one text fragment per item
    pub fn from_texts<I, S>(texts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        texts.into_iter().map(|text| Fragment::Text(text.into())).collect()
    }

    /// A capture holding one fragment per character of `text`
    pub fn chars(text: &str) -> Self {
        text.chars().map(|c| Fragment::Text(c.to_string())).collect()
    }

    pub fn push(&mut self, fragment: impl Into<Fragment>) {
        self.fragments.push(fragment.into());
    }

    /// Nest `capture` as a single group at the end
    pub fn push_group(&mut self, capture: Capture) {
        self.fragments.push(Fragment::Group(capture));
    }

    /// Splice the fragments of `other` onto the end, without nesting
    pub fn append(&mut self, other: Capture) {
        self.fragments.extend(other.fragments);
    }

    pub fn fragments(&self) -> &[Fragment] {
        &self.fragments
    }

    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Fragment> {
        self.fragments.iter()
    }

    /// Concatenate every text fragment, depth first, into one string
    pub fn flatten(&self) -> String {
        let mut flat = String::new();
        let mut stack = vec![self.fragments.iter()];

        while let Some(fragments) = stack.last_mut() {
            match fragments.next() {
                Some(Fragment::Text(text)) => flat.push_str(text),
                Some(Fragment::Group(group)) => stack.push(group.fragments.iter()),
                None => {
                    stack.pop();
                }
            }
        }

        flat
    }

    /// The join-mode form of this capture: one fragment with the flattened text
    pub fn joined(&self) -> Capture {
        Capture::text(self.flatten())
    }
}

impl fmt::Display for Capture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.flatten())
    }
}

impl FromIterator<Fragment> for Capture {
    fn from_iter<I: IntoIterator<Item = Fragment>>(iter: I) -> Self {
        Capture {
            fragments: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Capture {
    type Item = Fragment;
    type IntoIter = std::vec::IntoIter<Fragment>;

    fn into_iter(self) -> Self::IntoIter {
        self.fragments.into_iter()
    }
}

impl<'a> IntoIterator for &'a Capture {
    type Item = &'a Fragment;
    type IntoIter = std::slice::Iter<'a, Fragment>;

    fn into_iter(self) -> Self::IntoIter {
        self.fragments.iter()
    }
}
