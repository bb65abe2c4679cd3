use std::collections::{HashMap, HashSet};

use super::Document;

/// In-memory index over parsed notes.
///
/// Documents are kept newest-first by date; notes sharing a date keep the
/// order they were added in. Lookups by slug and tag return references into
/// that list.
#[derive(Debug, Default)]
pub struct NoteIndex {
    docs: Vec<Document>,
    by_slug: HashMap<String, usize>,
    by_tag: HashMap<String, Vec<usize>>,
}

impl NoteIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds an index from a batch of documents.
    ///
    /// Of several documents sharing a slug only the oldest is kept.
    pub fn from_documents(docs: impl IntoIterator<Item = Document>) -> Self {
        let mut sorted: Vec<Document> = docs.into_iter().collect();
        sorted.sort_by(|a, b| b.date.cmp(&a.date));

        let mut seen = HashSet::new();
        let mut docs = Vec::with_capacity(sorted.len());
        for doc in sorted.into_iter().rev() {
            if seen.insert(doc.slug.clone()) {
                docs.push(doc);
            } else {
                log::warn!("Duplicate slug {}; keeping the older note", doc.slug);
            }
        }
        docs.reverse();

        let mut index = Self {
            docs,
            ..Self::default()
        };
        index.rebuild_lookups();
        index
    }

    /// Adds one document, replacing any earlier document with the same slug.
    pub fn insert(&mut self, doc: Document) {
        if let Some(&pos) = self.by_slug.get(&doc.slug) {
            log::debug!("Replacing note with duplicate slug {}", doc.slug);
            self.docs.remove(pos);
        }
        let pos = self.docs.partition_point(|existing| existing.date >= doc.date);
        self.docs.insert(pos, doc);
        self.rebuild_lookups();
    }

    /// All documents, newest first.
    pub fn documents(&self) -> &[Document] {
        &self.docs
    }

    pub fn get(&self, slug: &str) -> Option<&Document> {
        self.by_slug.get(slug).map(|&pos| &self.docs[pos])
    }

    /// Documents carrying `tag`, newest first.
    pub fn tagged(&self, tag: &str) -> Vec<&Document> {
        self.by_tag
            .get(tag)
            .map(|positions| positions.iter().map(|&pos| &self.docs[pos]).collect())
            .unwrap_or_default()
    }

    /// Every tag in use, sorted.
    pub fn tags(&self) -> Vec<&str> {
        let mut tags: Vec<&str> = self.by_tag.keys().map(String::as_str).collect();
        tags.sort_unstable();
        tags
    }

    pub fn len(&self) -> usize {
        self.docs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }

    fn rebuild_lookups(&mut self) {
        self.by_slug.clear();
        self.by_tag.clear();
        for (pos, doc) in self.docs.iter().enumerate() {
            self.by_slug.insert(doc.slug.clone(), pos);
            for tag in &doc.tags {
                let positions = self.by_tag.entry(tag.clone()).or_default();
                if positions.last() != Some(&pos) {
                    positions.push(pos);
                }
            }
        }
    }
}
