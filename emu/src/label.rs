use indexmap::IndexMap;

// name -> index of the `name:` line
#[derive(Debug, Clone, Default)]
pub struct Labels {
    labels: IndexMap<String, usize>,
    // (name, first definition, later definition)
    redefined: Vec<(String, usize, usize)>,
}

impl Labels {
    pub fn new() -> Self {
        Labels {
            labels: IndexMap::new(),
            redefined: Vec::new(),
        }
    }

    /// The first definition of a name is the one branches resolve to.
    pub fn insert(&mut self, name: String, idx: usize) {
        match self.labels.get(&name) {
            Some(&first) => self.redefined.push((name, first, idx)),
            None => {
                self.labels.insert(name, idx);
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<usize> {
        self.labels.get(name).copied()
    }

    /// Where execution resumes after a taken branch to `name`.
    pub fn target(&self, name: &str) -> Option<usize> {
        self.get(name).map(|idx| idx + 1)
    }

    pub fn redefined(&self) -> &[(String, usize, usize)] {
        &self.redefined
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}
