use crate::error::ModuleError;
use std::borrow::Cow;
use tracing::debug;
use vbridge_domain::config::DispatchConfig;
use vbridge_view_group::{DefinitionBuilder, ViewGroupDefinition};

/// A native module as seen by the host: a name plus the definitions it registered.
///
/// The descriptor owns its frozen [`ViewGroupDefinition`] for as long as the registration
/// lives; the builder that produced it is never exposed.
#[derive(Debug, Clone)]
pub struct ModuleDescriptor {
    name: Cow<'static, str>,
    view_group: Option<ViewGroupDefinition>,
}

impl ModuleDescriptor {
    /// Starts describing the module `name`.
    ///
    /// # Example
    /// ```rust
    /// use std::sync::Arc;
    /// use vbridge::ModuleDescriptor;
    /// use vbridge::domain::action::ActionKind;
    /// use vbridge_derive::Element;
    ///
    /// #[derive(Debug, Default, Element)]
    /// struct Pager {
    ///     pages: Vec<Arc<Page>>,
    /// }
    ///
    /// #[derive(Debug, Element)]
    /// struct Page;
    ///
    /// # fn main() -> Result<(), vbridge::ModuleError> {
    /// let module = ModuleDescriptor::builder("Pager")
    ///     .view_group(|group| {
    ///         group.get_child_count(|pager: &Pager| pager.pages.len());
    ///     })
    ///     .build()?;
    ///
    /// assert_eq!(module.name(), "Pager");
    /// assert!(module.supports(ActionKind::GetChildCount));
    /// # Ok(())
    /// # }
    /// ```
    #[must_use = "The builder must be finished with `build()`."]
    pub fn builder(name: impl Into<Cow<'static, str>>) -> ModuleDescriptorBuilder {
        ModuleDescriptorBuilder {
            name: name.into(),
            dispatch: DispatchConfig::default(),
            view_group: None,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The module's view-group definition, if it declared one.
    #[must_use]
    pub const fn view_group(&self) -> Option<&ViewGroupDefinition> {
        self.view_group.as_ref()
    }

    /// Whether the module's view-group definition handles `kind`.
    #[must_use]
    pub fn supports(&self, kind: vbridge_domain::action::ActionKind) -> bool {
        self.view_group.as_ref().is_some_and(|definition| definition.lookup(kind).is_some())
    }
}

/// One definition pass for a [`ModuleDescriptor`].
#[derive(Debug)]
pub struct ModuleDescriptorBuilder {
    name: Cow<'static, str>,
    dispatch: DispatchConfig,
    view_group: Option<ViewGroupDefinition>,
}

impl ModuleDescriptorBuilder {
    /// Applies dispatch settings to the definitions declared after this call.
    #[must_use = "The builder must be finished with `build()`."]
    pub fn dispatch(mut self, config: &DispatchConfig) -> Self {
        self.dispatch = config.clone();
        self
    }

    /// Declares the view-group actions; `define` receives a fresh [`DefinitionBuilder`].
    ///
    /// Declaring the view group again replaces the previous definition.
    #[must_use = "The builder must be finished with `build()`."]
    pub fn view_group<F>(mut self, define: F) -> Self
    where
        F: FnOnce(&mut DefinitionBuilder),
    {
        let mut builder = DefinitionBuilder::with_config(&self.dispatch);
        define(&mut builder);
        self.view_group = Some(builder.build());
        self
    }

    /// Finishes the module description.
    ///
    /// # Errors
    /// Returns [`ModuleError::InvalidDescriptor`] if the module name is blank.
    pub fn build(self) -> Result<ModuleDescriptor, ModuleError> {
        if self.name.trim().is_empty() {
            return Err(ModuleError::InvalidDescriptor {
                message: "module name cannot be empty".into(),
                context: None,
            });
        }

        debug!(
            module = %self.name,
            view_group = ?self.view_group.as_ref().map(|d| d.supported().collect::<Vec<_>>()),
            "Module described"
        );

        Ok(ModuleDescriptor { name: self.name, view_group: self.view_group })
    }
}
