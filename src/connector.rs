//! Connector: a store paired with a default equality strategy.

use crate::{Binding, Equality, Renderer, Shallow, Store};

/// Hands out [`Binding`]s onto one store.
///
/// The connector fixes the store-wide default equality strategy ([`Shallow`]
/// unless configured otherwise). Each binding may override it with
/// [`bind_with`](Self::bind_with).
///
/// # Example
///
/// ```rust
/// use oxide_select::{Connector, Store, TestRenderer, TestStore};
///
/// #[derive(Clone)]
/// struct Form { text: String }
///
/// #[derive(Clone)]
/// struct State { form: Form }
///
/// enum Action { SetText(String) }
///
/// let store = TestStore::new(
///     State { form: Form { text: String::new() } },
///     |_: &State, action: Action| match action {
///         Action::SetText(text) => State { form: Form { text } },
///     },
/// );
/// let connector = Connector::new(store);
///
/// let renderer = TestRenderer::new();
/// let text = connector.bind(|state: &State| state.form.text.clone(), renderer.clone());
///
/// connector.store().dispatch(Action::SetText("text".into()));
/// connector.store().dispatch(Action::SetText("text".into()));
///
/// assert_eq!(text.get(), "text");
/// assert_eq!(renderer.count(), 1);
/// ```
#[derive(Clone, Debug)]
pub struct Connector<St, E = Shallow> {
    store: St,
    equality: E,
}

impl<St: Store> Connector<St> {
    /// Create a connector whose bindings compare selections shallowly.
    pub fn new(store: St) -> Self {
        Self::with_equality(store, Shallow)
    }
}

impl<St: Store, E> Connector<St, E> {
    /// Create a connector with a custom default equality strategy.
    pub fn with_equality(store: St, equality: E) -> Self {
        Connector { store, equality }
    }

    /// The connected store.
    pub fn store(&self) -> &St {
        &self.store
    }

    /// Bind `selector` using the connector's default equality strategy.
    pub fn bind<T, Sel, R>(&self, selector: Sel, renderer: R) -> Binding<T>
    where
        T: Clone + Send + 'static,
        Sel: Fn(&St::State) -> T + Send + Sync + 'static,
        E: Equality<T> + Clone + Send + Sync + 'static,
        R: Renderer<T> + Send + 'static,
    {
        Binding::new(&self.store, selector, self.equality.clone(), renderer)
    }

    /// Bind `selector` with an equality strategy for this binding only.
    pub fn bind_with<T, Sel, Cmp, R>(&self, selector: Sel, equality: Cmp, renderer: R) -> Binding<T>
    where
        T: Clone + Send + 'static,
        Sel: Fn(&St::State) -> T + Send + Sync + 'static,
        Cmp: Equality<T> + Send + Sync + 'static,
        R: Renderer<T> + Send + 'static,
    {
        Binding::new(&self.store, selector, equality, renderer)
    }
}
