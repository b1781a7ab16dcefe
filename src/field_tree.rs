use super::FieldTree;

impl<T> FieldTree<T> {
    pub fn new() -> Self {
        Self {
            token: None,
            children: Vec::new(),
        }
    }

    /// Insert `token` at the end of the byte path `value`. Fails if a
    /// token is already registered for that exact path.
    pub fn insert(&mut self, value: &[u8], token: T) -> Result<(), T> {
        if !value.is_empty() {
            match self
                .children
                .binary_search_by_key(&value[0], |child| child.0)
            {
                Ok(index) => self.children[index].1.insert(&value[1..], token),
                Err(index) => {
                    let mut field = FieldTree::new();
                    field.insert(&value[1..], token)?;
                    self.children.insert(index, (value[0], field));
                    Ok(())
                }
            }
        } else {
            match self.token.replace(token) {
                Some(t) => Err(t),
                None => Ok(()),
            }
        }
    }
}

impl<T: Clone> FieldTree<T> {
    /// Longest prefix of `code_part` registered in the tree, returned as
    /// `(token, length)`. Used for maximal-munch punctuation matching.
    pub fn find(&self, code_part: &[u8]) -> Option<(T, usize)> {
        let mut current = self;
        let mut longest: Option<(T, usize)> = current.token.as_ref().map(|t| (t.clone(), 0));
        let mut index = 0;

        while index < code_part.len() {
            match current
                .children
                .binary_search_by_key(&code_part[index], |c| c.0)
            {
                Ok(i) => {
                    index += 1;
                    current = &current.children[i].1;
                    if let Some(t) = current.token.as_ref() {
                        longest = Some((t.clone(), index));
                    }
                }
                Err(_) => break,
            }
        }
        longest
    }
}
