//! Command registry and click dispatch
//!
//! UI elements name the command they trigger through a dispatch attribute.
//! Clicking one executes the bound callback with a JSON description of the click.

use crate::surface::{ElementRef, RenderSurface};
use serde_json::{json, Value};
use std::collections::{BTreeMap, HashMap};

/// Callback bound to a command name
pub type CommandFn = Box<dyn Fn(&[Value]) -> Value + Send + Sync>;

/// Built-in command restoring the editor to its last saved state
pub const EDITOR_REVERT: &str = "editor.revert";

/// Maps command names to callbacks
pub struct CommandRegistry {
    commands: HashMap<String, CommandFn>,
}

impl CommandRegistry {
    /// Create a registry with the built-in commands
    pub fn new() -> Self {
        let mut registry = Self::empty();
        registry.register(EDITOR_REVERT, |_| Value::Null);
        registry
    }

    /// Create a registry with no commands at all
    pub fn empty() -> Self {
        Self {
            commands: HashMap::new(),
        }
    }

    /// Bind a callback, replacing any existing binding
    pub fn register<F>(&mut self, name: impl Into<String>, callback: F)
    where
        F: Fn(&[Value]) -> Value + Send + Sync + 'static,
    {
        self.commands.insert(name.into(), Box::new(callback));
    }

    /// Run a command, or return `None` if nothing is bound to the name
    pub fn execute(&self, name: &str, args: &[Value]) -> Option<Value> {
        self.commands.get(name).map(|command| command(args))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.commands.contains_key(name)
    }

    /// Registered command names, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.commands.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for CommandRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandRegistry")
            .field("commands", &self.names())
            .finish()
    }
}

/// Elements wired to commands through the dispatch attribute
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClickBindings {
    bindings: BTreeMap<ElementRef, String>,
}

impl ClickBindings {
    /// Collect every element carrying `attribute` with a non-empty command name
    pub fn bind(surface: &dyn RenderSurface, attribute: &str) -> Self {
        let bindings = surface
            .query_by_attribute(attribute)
            .into_iter()
            .filter_map(|element| {
                let name = surface.attribute(element, attribute)?;
                (!name.is_empty()).then_some((element, name))
            })
            .collect();
        Self { bindings }
    }

    /// Command bound to an element
    pub fn command_for(&self, element: ElementRef) -> Option<&str> {
        self.bindings.get(&element).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Handle a click on an element
    ///
    /// The command receives one argument describing the click event. Clicks on
    /// unbound elements, or bound to unknown commands, do nothing.
    pub fn dispatch_click(&self, registry: &CommandRegistry, element: ElementRef) -> Option<Value> {
        let name = self.command_for(element)?;
        let event = json!({ "type": "click", "element": element.0, "command": name });
        let result = registry.execute(name, &[event]);
        if result.is_none() {
            log::warn!("Click on element {} names unknown command '{}'", element.0, name);
        }
        result
    }
}
