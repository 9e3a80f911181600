//! Application state and composition.

use std::sync::Arc;

use beastbound_domain::{ActorId, GachaTable, SpeciesCatalog};

use crate::infrastructure::ports::{
    ActorRepo, AuthError, AuthPort, ClockPort, NotificationPort, RandomPort,
};
use crate::use_cases::{DuelOps, GachaOps, QuestOps};

/// Static content handed to the engine at composition time.
pub struct ContentConfig {
    pub species: SpeciesCatalog,
    pub gacha_tables: Vec<GachaTable>,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            species: SpeciesCatalog::default(),
            gacha_tables: vec![GachaTable::standard()],
        }
    }
}

/// Main application state.
///
/// Holds the use cases, wired from ports. Handed to request handlers by the
/// embedding transport layer.
pub struct App {
    pub duels: Arc<DuelOps>,
    pub quests: Arc<QuestOps>,
    pub gacha: Arc<GachaOps>,
    auth: Arc<dyn AuthPort>,
}

impl App {
    /// Create a new App with all dependencies wired up.
    pub fn new(
        actors: Arc<dyn ActorRepo>,
        notifications: Arc<dyn NotificationPort>,
        auth: Arc<dyn AuthPort>,
        random: Arc<dyn RandomPort>,
        clock: Arc<dyn ClockPort>,
        content: ContentConfig,
    ) -> Self {
        let duels = Arc::new(DuelOps::new(actors.clone(), notifications.clone()));
        let quests = Arc::new(QuestOps::new(
            actors.clone(),
            notifications.clone(),
            random.clone(),
            clock,
            content.species,
        ));
        let gacha = Arc::new(GachaOps::new(
            actors,
            notifications,
            random,
            content.gacha_tables,
        ));
        Self {
            duels,
            quests,
            gacha,
            auth,
        }
    }

    /// Resolve a request credential to the acting actor.
    pub async fn authenticate(&self, credential: &str) -> Result<ActorId, AuthError> {
        self.auth.resolve(credential).await
    }
}
