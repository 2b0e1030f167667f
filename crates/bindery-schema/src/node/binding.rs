use crate::{MAX_MEMBER_NAME_LEN, node::NodeError, prelude::*, visit::VisitableNode};
use derive_more::Display;

///
/// BindingKind
///
/// How a member is exposed to the host. Fixed by the annotation call site,
/// never inferred and never changed afterwards.
///

#[derive(Clone, Copy, Debug, Display, Eq, PartialEq, Serialize, Deserialize)]
#[remain::sorted]
pub enum BindingKind {
    Event,
    Property,
    Service,
}

///
/// Binding
///
/// Descriptor for one annotated class member.
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Binding {
    pub member: &'static str,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<&'static str>,

    pub kind: BindingKind,

    #[serde(default, skip_serializing_if = "AspectList::is_empty")]
    pub aspects: AspectList,
}

impl Binding {
    #[must_use]
    pub const fn new(member: &'static str, kind: BindingKind) -> Self {
        Self {
            member,
            name: None,
            kind,
            aspects: AspectList::EMPTY,
        }
    }

    #[must_use]
    /// External name the host sees; defaults to the member's own name.
    pub fn resolved_name(&self) -> &'static str {
        self.name.unwrap_or(self.member)
    }
}

impl ValidateNode for Binding {
    fn validate(&self) -> Result<(), ErrorTree> {
        let mut errs = ErrorTree::new();

        if self.member.is_empty() {
            err!(errs, "member name cannot be empty");
        }
        if self.member.len() > MAX_MEMBER_NAME_LEN {
            err!(
                errs,
                "member name '{}' exceeds max length {MAX_MEMBER_NAME_LEN}",
                self.member
            );
        }

        let external = self.resolved_name();
        if external.is_empty() {
            errs.add(NodeError::EmptyBindingName {
                member: self.member,
            });
        }
        if external.len() > MAX_MEMBER_NAME_LEN {
            err!(
                errs,
                "external name '{external}' exceeds max length {MAX_MEMBER_NAME_LEN}"
            );
        }
        if !external.is_ascii() {
            err!(errs, "external name '{external}' must be ASCII");
        }

        errs.result()
    }
}

impl VisitableNode for Binding {
    fn route_key(&self) -> String {
        self.member.to_string()
    }

    fn drive<V: Visitor>(&self, v: &mut V) {
        self.aspects.accept(v);
    }
}

///
/// TESTS
///
