//! Hooks and the run lifecycle

use serde_json::Value;
use tracing::debug;

use super::{FormInspector, Inspector, Messages};
use crate::error::{InspectorResult, ValidationFailure};

// ============================================================================
// INSPECT TRAIT
// ============================================================================

/// A node of the validation tree.
///
/// Implementors wrap an [`Inspector`] and override the hooks they need.
/// Running, counting and reading messages come from [`InspectExt`].
///
/// # Examples
///
/// ```rust,ignore
/// use nebula_inspector::prelude::*;
/// use serde_json::Value;
///
/// struct Person {
///     inspector: Inspector,
/// }
///
/// impl Inspect for Person {
///     fn inspector(&self) -> &Inspector { &self.inspector }
///     fn inspector_mut(&mut self) -> &mut Inspector { &mut self.inspector }
///
///     fn setup(&mut self, _data: &Value) -> InspectorResult<()> {
///         self.inspector
///             .define("name", "Names are 2 to 40 letters")
///             .rule("alpha")?
///             .length(Some(2), Some(40));
///         Ok(())
///     }
///
///     fn validate(&mut self, data: &Value) -> InspectorResult<()> {
///         self.inspector.check("firstName", &data["firstName"], &["name"])?;
///         Ok(())
///     }
/// }
/// ```
pub trait Inspect: Send {
    /// The node state.
    fn inspector(&self) -> &Inspector;

    /// The node state, mutably.
    fn inspector_mut(&mut self) -> &mut Inspector;

    /// Runs after the node is cleared and before [`validate`](Self::validate).
    ///
    /// Custom rules are dropped on every run, so this is where they are
    /// defined.
    fn setup(&mut self, _data: &Value) -> InspectorResult<()> {
        Ok(())
    }

    /// Checks `data` and runs children. The default does nothing.
    fn validate(&mut self, _data: &Value) -> InspectorResult<()> {
        Ok(())
    }

    /// The declarative node behind this one, if any.
    ///
    /// A parent [`FormInspector`] propagates nested checks and requirements
    /// only to children that return `Some`.
    fn form_mut(&mut self) -> Option<&mut FormInspector> {
        None
    }
}

// ============================================================================
// RUN LIFECYCLE
// ============================================================================

/// Running and reading any [`Inspect`] node.
pub trait InspectExt: Inspect {
    /// Clears the node, then runs `setup` and `validate` on `data`.
    ///
    /// Invalid data never fails the run; read the outcome with
    /// [`count_messages`](Self::count_messages) and
    /// [`messages`](Self::messages).
    ///
    /// # Errors
    ///
    /// Configuration errors raised by the hooks.
    fn run(&mut self, data: &Value) -> InspectorResult<&mut Self> {
        execute(self, data, false)?;
        Ok(self)
    }

    /// Like [`run`](Self::run), but fails with
    /// [`InspectorError::Validation`](crate::error::InspectorError::Validation)
    /// if any message was collected anywhere in the tree.
    fn run_strict(&mut self, data: &Value) -> InspectorResult<&mut Self> {
        execute(self, data, true)?;
        Ok(self)
    }

    /// Number of messages across the node and its children.
    fn count_messages(&self) -> usize {
        self.inspector().count_messages()
    }

    /// The message tree of the node.
    fn messages(&self) -> Messages {
        self.inspector().messages()
    }

    /// The messages at a field key or dotted path.
    fn messages_at(&self, path: &str) -> Messages {
        self.inspector().messages_at(path)
    }
}

impl<T: Inspect + ?Sized> InspectExt for T {}

fn execute<T: Inspect + ?Sized>(node: &mut T, data: &Value, strict: bool) -> InspectorResult<()> {
    node.inspector_mut().clear();
    node.setup(data)?;
    node.validate(data)?;

    let inspector = node.inspector();
    let count = inspector.count_messages();
    debug!(count, strict, "inspection finished");

    if strict && count > 0 {
        let failure = ValidationFailure::new(
            inspector.config().failure_message.clone(),
            count,
            inspector.messages(),
        );
        return Err(failure.into());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::InspectorError;
    use serde_json::json;

    #[derive(Debug)]
    struct Literal {
        inspector: Inspector,
    }

    impl Inspect for Literal {
        fn inspector(&self) -> &Inspector {
            &self.inspector
        }

        fn inspector_mut(&mut self) -> &mut Inspector {
            &mut self.inspector
        }

        fn validate(&mut self, data: &Value) -> InspectorResult<()> {
            if *data != "data" {
                self.inspector.log("data", r#"The data was not equal to "data""#)?;
            }
            Ok(())
        }
    }

    #[test]
    fn test_run_is_chainable() {
        let mut node = Literal { inspector: Inspector::new() };
        assert_eq!(node.run(&json!("data")).unwrap().count_messages(), 0);
        assert_eq!(node.run(&json!("nondata")).unwrap().count_messages(), 1);
        assert_eq!(node.run(&json!("nondata")).unwrap().count_messages(), 1);
    }

    #[test]
    fn test_run_strict_carries_snapshot() {
        let mut node = Literal { inspector: Inspector::new() };
        let err = node.run_strict(&json!("nondata")).unwrap_err();

        let InspectorError::Validation(failure) = err else {
            panic!("expected a validation failure");
        };
        assert_eq!(failure.message(), "Please correct the errors shown below.");
        assert_eq!(failure.count(), 1);

        node.run(&json!("data")).unwrap();
        assert_eq!(failure.messages_at("data").count(), 1);
    }

    #[test]
    fn test_run_strict_passes_clean_data() {
        let mut node = Literal { inspector: Inspector::new() };
        assert!(node.run_strict(&json!("data")).is_ok());
    }

    #[test]
    fn test_dyn_inspect_runs() {
        let mut node: Box<dyn Inspect> = Box::new(Literal { inspector: Inspector::new() });
        node.run(&json!(1)).unwrap();
        assert_eq!(node.count_messages(), 1);
    }
}
