//! Logger and event dispatch
//!
//! A logger family is a root logger plus any loggers derived from it via
//! [`Logger::for_name`]. The family shares one [`LoggingConfig`] by
//! reference; each member keeps its own private, ordered list of attached
//! context handles.

use super::{
    config::{LoggingConfig, OutputBinding, SharedConfig},
    context_store::{ContextHandle, ContextStore},
    error::Result,
    event::LogEvent,
    level::LogLevel,
};
use chrono::Utc;
use serde_json::Value;

/// Name of the root logger
pub const ROOT_LOGGER_NAME: &str = "main";

/// A named emitter of leveled events.
///
/// # Example
///
/// ```
/// use context_logger::prelude::*;
/// use context_logger::{formats::JsonFormat, outputs::MemoryOutput};
/// use serde_json::json;
///
/// let store = ContextStore::new();
/// let sink = MemoryOutput::new();
/// let root = Logger::root(store.clone());
/// root.add_output(OutputBinding::new(
///     Box::new(JsonFormat::new()),
///     Box::new(sink.clone()),
/// ));
///
/// let mut logger = root.for_name("worker");
/// let ctx = store.create_filled([("job", json!(7))]);
/// logger.add_context([ctx]);
/// logger.info(vec![json!("job started")]).unwrap();
///
/// assert_eq!(sink.lines().len(), 1);
/// ```
pub struct Logger {
    name: String,
    config: SharedConfig,
    store: ContextStore,
    contexts: Vec<ContextHandle>,
}

impl Logger {
    /// Create the root of a logger family.
    ///
    /// The root starts with the most verbose floor (`Trace`), no outputs,
    /// and no attached contexts. Derive further loggers with
    /// [`Logger::for_name`]; they all observe configuration changes made
    /// through any member of the family.
    pub fn root(store: ContextStore) -> Self {
        Self {
            name: ROOT_LOGGER_NAME.to_string(),
            config: LoggingConfig::new().shared(),
            store,
            contexts: Vec::new(),
        }
    }

    /// Derive a named logger sharing this logger's configuration.
    ///
    /// The attachment list is copied at creation time and independently
    /// mutable afterwards; the configuration is shared by reference.
    pub fn for_name(&self, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            config: self.config.clone(),
            store: self.store.clone(),
            contexts: self.contexts.clone(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The currently attached context handles, in attachment order
    pub fn contexts(&self) -> &[ContextHandle] {
        &self.contexts
    }

    /// Append a binding to the shared configuration's output list.
    ///
    /// Visible to the whole logger family.
    pub fn add_output(&self, binding: OutputBinding) -> &Self {
        self.config.write().outputs.push(binding);
        self
    }

    /// Attach context handles, skipping ones already attached.
    ///
    /// Attachment order determines merge precedence: a later-attached
    /// context's keys win collisions.
    pub fn add_context<I>(&mut self, handles: I) -> &mut Self
    where
        I: IntoIterator<Item = ContextHandle>,
    {
        for handle in handles {
            if !self.contexts.contains(&handle) {
                self.contexts.push(handle);
            }
        }
        self
    }

    /// Detach context handles; absent handles are ignored
    pub fn remove_context<I>(&mut self, handles: I) -> &mut Self
    where
        I: IntoIterator<Item = ContextHandle>,
    {
        for handle in handles {
            self.contexts.retain(|attached| *attached != handle);
        }
        self
    }

    /// Whether at least one of the given handles is attached
    pub fn has_some_contexts<I>(&self, handles: I) -> bool
    where
        I: IntoIterator<Item = ContextHandle>,
    {
        handles
            .into_iter()
            .any(|handle| self.contexts.contains(&handle))
    }

    /// Whether every one of the given handles is attached
    pub fn has_all_contexts<I>(&self, handles: I) -> bool
    where
        I: IntoIterator<Item = ContextHandle>,
    {
        handles
            .into_iter()
            .all(|handle| self.contexts.contains(&handle))
    }

    /// The shared configuration's severity floor
    pub fn min_level(&self) -> LogLevel {
        self.config.read().min_level
    }

    /// Set the shared floor; affects every logger in the family
    pub fn set_min_level(&self, level: LogLevel) -> &Self {
        self.config.write().min_level = level;
        self
    }

    /// Emit an event at an explicit level.
    ///
    /// Arguments are normalized first: a leading string argument becomes
    /// the message and the rest become positional args; with no leading
    /// string a placeholder template (`%i` per value, comma-joined) is
    /// synthesized and every value becomes an arg.
    ///
    /// Events below the shared floor are dropped silently with no side
    /// effects. Otherwise the merged context and timestamp are captured
    /// once and routed through each passing output binding in order;
    /// the first format or sink error aborts the remaining bindings and
    /// propagates.
    pub fn log(&self, level: LogLevel, args: Vec<Value>) -> Result<()> {
        let mut config = self.config.write();
        if level < config.min_level {
            return Ok(());
        }
        if !config.outputs.iter().any(|binding| binding.accepts(level)) {
            return Ok(());
        }

        let (message, args) = normalize_args(args);
        let merged = self.store.merge_all(&self.contexts)?;
        let event = LogEvent::new(&self.name, Utc::now(), level, merged, message, args);

        for binding in config.outputs.iter_mut() {
            if !binding.accepts(level) {
                continue;
            }
            let rendered = binding.format.format(&event)?;
            binding.output.write(&rendered)?;
        }
        Ok(())
    }

    pub fn trace(&self, args: Vec<Value>) -> Result<()> {
        self.log(LogLevel::Trace, args)
    }

    pub fn debug(&self, args: Vec<Value>) -> Result<()> {
        self.log(LogLevel::Debug, args)
    }

    pub fn info(&self, args: Vec<Value>) -> Result<()> {
        self.log(LogLevel::Info, args)
    }

    pub fn alert(&self, args: Vec<Value>) -> Result<()> {
        self.log(LogLevel::Alert, args)
    }

    pub fn warning(&self, args: Vec<Value>) -> Result<()> {
        self.log(LogLevel::Warning, args)
    }

    /// Alias for [`Logger::warning`]
    pub fn warn(&self, args: Vec<Value>) -> Result<()> {
        self.warning(args)
    }

    pub fn critical(&self, args: Vec<Value>) -> Result<()> {
        self.log(LogLevel::Critical, args)
    }

    /// Flush every output binding in the shared configuration
    pub fn flush(&self) -> Result<()> {
        let mut config = self.config.write();
        for binding in config.outputs.iter_mut() {
            binding.output.flush()?;
        }
        Ok(())
    }
}

/// Split positional values into a message template and argument list.
///
/// A leading string is the caller's message; anything else means no
/// explicit template was given and `%i` placeholders are synthesized, one
/// per value.
fn normalize_args(args: Vec<Value>) -> (String, Vec<Value>) {
    let mut values = args.into_iter();
    match values.next() {
        None => (String::new(), Vec::new()),
        Some(Value::String(message)) => (message, values.collect()),
        Some(first) => {
            let rest: Vec<Value> = std::iter::once(first).chain(values).collect();
            let template = ",%i".repeat(rest.len());
            (template[1..].to_string(), rest)
        }
    }
}
