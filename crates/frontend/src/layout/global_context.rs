use leptos::prelude::Effect;
use leptos::prelude::*;
use serde::{Deserialize, Serialize};
use web_sys::window;

/// Every destination the shell can show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Page {
    #[default]
    Landing,
    AdminDashboard,
    ClientLogin,
    ClientDashboard,
    VehicleRegistration,
    BudgetCreation,
    ServiceChecklist,
    VehicleHistory,
}

impl Page {
    /// Stable key used in the `?page=` query parameter
    pub fn key(&self) -> &'static str {
        match self {
            Page::Landing => "landing",
            Page::AdminDashboard => "admin",
            Page::ClientLogin => "client-login",
            Page::ClientDashboard => "client-dashboard",
            Page::VehicleRegistration => "vehicle-registration",
            Page::BudgetCreation => "budget-creation",
            Page::ServiceChecklist => "service-checklist",
            Page::VehicleHistory => "vehicle-history",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Page::Landing => "AutoTech",
            Page::AdminDashboard => "Painel Administrativo",
            Page::ClientLogin => "Área do Cliente",
            Page::ClientDashboard => "Meu Veículo",
            Page::VehicleRegistration => "Cadastro de Veículo",
            Page::BudgetCreation => "Criar Orçamento",
            Page::ServiceChecklist => "Checklist de Serviços",
            Page::VehicleHistory => "Histórico do Veículo",
        }
    }

    pub fn all() -> [Page; 8] {
        [
            Page::Landing,
            Page::AdminDashboard,
            Page::ClientLogin,
            Page::ClientDashboard,
            Page::VehicleRegistration,
            Page::BudgetCreation,
            Page::ServiceChecklist,
            Page::VehicleHistory,
        ]
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Page::all().into_iter().find(|page| page.key() == key)
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct PageQuery {
    page: Option<String>,
}

fn page_from_search(search: &str) -> Page {
    serde_qs::from_str::<PageQuery>(search.trim_start_matches('?'))
        .ok()
        .and_then(|q| q.page)
        .and_then(|key| Page::from_key(&key))
        .unwrap_or_default()
}

/// Navigation state shared by the shell and every view
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub current: RwSignal<Page>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            current: RwSignal::new(Page::default()),
        }
    }

    /// Restore the page from the URL and keep the URL in sync afterwards
    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        let initial = page_from_search(&search);
        if initial != Page::default() {
            self.current.set(initial);
        }

        let this = *self;
        Effect::new(move |_| {
            let page = this.current.get();
            let query = serde_qs::to_string(&PageQuery {
                page: Some(page.key().to_string()),
            })
            .unwrap_or_default();
            let new_url = format!("?{}", query);

            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();

            // Only touch history when the URL actually changed
            if current_search != new_url {
                if let Some(w) = window() {
                    if let Ok(history) = w.history() {
                        let _ = history.replace_state_with_url(
                            &wasm_bindgen::JsValue::NULL,
                            "",
                            Some(&new_url),
                        );
                    }
                }
            }
            if let Some(document) = window().and_then(|w| w.document()) {
                document.set_title(page.title());
            }
        });
    }

    pub fn navigate(&self, page: Page) {
        log::info!("navigate: {:?} -> {:?}", self.current.get_untracked(), page);
        self.current.set(page);
    }
}

/// Shortcut for views: `let nav = use_navigation(); nav.navigate(Page::AdminDashboard)`
pub fn use_navigation() -> AppGlobalContext {
    use_context::<AppGlobalContext>().expect("AppGlobalContext context not found")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_keys_round_trip() {
        for page in Page::all() {
            assert_eq!(Page::from_key(page.key()), Some(page));
        }
        assert_eq!(Page::from_key("nope"), None);
    }

    #[test]
    fn test_page_from_search() {
        assert_eq!(page_from_search("?page=budget-creation"), Page::BudgetCreation);
        assert_eq!(page_from_search("?page=admin"), Page::AdminDashboard);
        assert_eq!(page_from_search("?page=unknown"), Page::Landing);
        assert_eq!(page_from_search(""), Page::Landing);
    }
}
