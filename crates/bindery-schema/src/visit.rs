//! Node traversal for route-aware validation.

use crate::error::ErrorTree;

///
/// ValidateNode
///
/// Local, structural validation for a single node.
///

pub trait ValidateNode {
    fn validate(&self) -> Result<(), ErrorTree> {
        Ok(())
    }
}

///
/// VisitableNode
///

pub trait VisitableNode: ValidateNode {
    /// Route segment this node contributes to error messages.
    fn route_key(&self) -> String {
        String::new()
    }

    /// Drive the visitor into child nodes.
    fn drive<V: Visitor>(&self, _: &mut V) {}

    fn accept<V: Visitor>(&self, v: &mut V)
    where
        Self: Sized,
    {
        v.enter(&self.route_key());
        v.visit(self);
        self.drive(v);
        v.exit();
    }
}

///
/// Visitor
///

pub trait Visitor {
    fn enter(&mut self, _key: &str) {}
    fn exit(&mut self) {}
    fn visit(&mut self, node: &dyn ValidateNode);
}

///
/// ValidateVisitor
///
/// Collects per-node validation failures keyed by the route that reached
/// the failing node.
///

#[derive(Debug, Default)]
pub struct ValidateVisitor {
    route: Vec<String>,
    pub errors: ErrorTree,
}

impl ValidateVisitor {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn route(&self) -> String {
        self.route
            .iter()
            .filter(|segment| !segment.is_empty())
            .cloned()
            .collect::<Vec<_>>()
            .join(".")
    }
}

impl Visitor for ValidateVisitor {
    fn enter(&mut self, key: &str) {
        self.route.push(key.to_string());
    }

    fn exit(&mut self) {
        self.route.pop();
    }

    fn visit(&mut self, node: &dyn ValidateNode) {
        if let Err(errs) = node.validate() {
            self.errors.merge(&self.route(), errs);
        }
    }
}
