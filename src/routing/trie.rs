//! Segment trie for patterns with path parameters.
//!
//! # Responsibilities
//! - Store wildcard routes keyed by path segment
//! - Walk a request path, preferring literal children over the parameter child
//!
//! # Design Decisions
//! - Every parameter segment collapses onto one child per node, so
//!   `/users/{id}` and `/users/{name}` share a node
//! - No backtracking: once a literal child is taken, the parameter sibling is
//!   never revisited, even if the literal branch dead-ends
//! - The walk is bounded by the number of request segments

use std::collections::HashMap;

use crate::routing::descriptor::RouteDescriptor;
use crate::routing::method::HttpMethod;
use crate::routing::path::{is_param_segment, segments};

/// Routes terminating at one path, keyed by method.
pub type MethodRoutes<H> = HashMap<HttpMethod, RouteDescriptor<H>>;

#[derive(Debug)]
struct TrieNode<H> {
    literals: HashMap<String, TrieNode<H>>,
    param: Option<Box<TrieNode<H>>>,
    routes: MethodRoutes<H>,
}

impl<H> TrieNode<H> {
    fn new() -> Self {
        Self {
            literals: HashMap::new(),
            param: None,
            routes: HashMap::new(),
        }
    }

    fn child(&self, segment: &str) -> Option<&TrieNode<H>> {
        self.literals
            .get(segment)
            .or_else(|| self.param.as_deref())
    }

    fn child_mut_or_insert(&mut self, segment: &str) -> &mut TrieNode<H> {
        if is_param_segment(segment) {
            self.param.get_or_insert_with(|| Box::new(TrieNode::new()))
        } else {
            self.literals
                .entry(segment.to_string())
                .or_insert_with(TrieNode::new)
        }
    }

    fn collect<'a>(&'a self, out: &mut Vec<&'a RouteDescriptor<H>>) {
        let mut methods: Vec<_> = self.routes.values().collect();
        methods.sort_by_key(|d| d.method());
        out.extend(methods);

        let mut literals: Vec<_> = self.literals.iter().collect();
        literals.sort_by(|a, b| a.0.cmp(b.0));
        for (_, child) in literals {
            child.collect(out);
        }
        if let Some(param) = &self.param {
            param.collect(out);
        }
    }
}

/// Trie of wildcard routes.
#[derive(Debug)]
pub struct RouteTrie<H> {
    root: TrieNode<H>,
    len: usize,
}

impl<H> RouteTrie<H> {
    pub fn new() -> Self {
        Self {
            root: TrieNode::new(),
            len: 0,
        }
    }

    /// Method map of the node terminating `pattern`, creating nodes as needed.
    ///
    /// `pattern` must be normalised and contain at least one segment.
    pub(crate) fn routes_mut(&mut self, pattern: &str) -> &mut MethodRoutes<H> {
        let mut node = &mut self.root;
        for segment in segments(pattern) {
            node = node.child_mut_or_insert(segment);
        }
        &mut node.routes
    }

    /// Record that a new route (not an overwrite) was inserted.
    pub(crate) fn note_inserted(&mut self) {
        self.len += 1;
    }

    /// Walk `path` and return the route registered for `method`, if any.
    ///
    /// A path with no non-empty segment never matches.
    pub fn find(&self, path: &str, method: HttpMethod) -> Option<&RouteDescriptor<H>> {
        let mut segments = segments(path).peekable();
        segments.peek()?;

        let mut node = &self.root;
        for segment in segments {
            node = node.child(segment)?;
        }
        node.routes.get(&method)
    }

    /// All routes, depth first, literal children in lexical order before the
    /// parameter child.
    pub fn descriptors(&self) -> Vec<&RouteDescriptor<H>> {
        let mut out = Vec::with_capacity(self.len);
        self.root.collect(&mut out);
        out
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl<H> Default for RouteTrie<H> {
    fn default() -> Self {
        Self::new()
    }
}
