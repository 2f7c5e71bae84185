//! Single source of truth for the catalog: nine entity collections with
//! admin mutations, lookup queries, derived featured views, and
//! write-through persistence to device-local storage.

use crate::model::{
    generate_entity_id, now_iso, Category, Civilization, Constellation, Course, Deck, Instructor,
    Meditation, MetaphorCard, NEW_ID,
};
use crate::remote::RemoteApi;
use crate::storage::{Flusher, StateStorage, StorageResult};
use crate::store::patch::{
    CivilizationPatch, ConstellationPatch, CoursePatch, InstructorPatch, MeditationPatch,
    MetaphorCardPatch,
};
use log::{info, warn};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

pub const CONTENT_STORAGE_KEY: &str = "content-storage";

/// The persisted record: exactly the nine collections plus the last-update
/// stamp. Derived views are computed on read and never serialized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentState {
    pub courses: Vec<Course>,
    pub meditations: Vec<Meditation>,
    pub instructors: Vec<Instructor>,
    pub categories: Vec<Category>,
    pub metaphor_cards: Vec<MetaphorCard>,
    pub archangel_cards: Vec<MetaphorCard>,
    pub amu_mom_cards: Vec<MetaphorCard>,
    pub civilizations: Vec<Civilization>,
    pub constellations: Vec<Constellation>,
    pub last_updated: String,
}

impl Default for ContentState {
    fn default() -> Self {
        Self {
            courses: vec![],
            meditations: vec![],
            instructors: vec![],
            categories: vec![],
            metaphor_cards: vec![],
            archangel_cards: vec![],
            amu_mom_cards: vec![],
            civilizations: vec![],
            constellations: vec![],
            last_updated: now_iso(),
        }
    }
}

impl ContentState {
    /// First-launch population from the static seed catalog.
    pub fn seeded() -> Self {
        Self {
            courses: crate::seed::courses(),
            meditations: crate::seed::meditations(),
            instructors: crate::seed::instructors(),
            categories: crate::seed::categories(),
            metaphor_cards: crate::seed::cosmic_cards(),
            archangel_cards: crate::seed::archangel_cards(),
            amu_mom_cards: crate::seed::amu_mom_cards(),
            civilizations: crate::seed::civilizations(),
            constellations: crate::seed::constellations(),
            last_updated: now_iso(),
        }
    }
}

/// Server-pushed partial state: any collection present replaces the local
/// one wholesale. The seam a future backend sync would feed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContentDelta {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub courses: Option<Vec<Course>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meditations: Option<Vec<Meditation>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instructors: Option<Vec<Instructor>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<Category>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metaphor_cards: Option<Vec<MetaphorCard>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub archangel_cards: Option<Vec<MetaphorCard>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amu_mom_cards: Option<Vec<MetaphorCard>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub civilizations: Option<Vec<Civilization>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub constellations: Option<Vec<Constellation>>,
}

pub struct ContentStore {
    state: RwLock<ContentState>,
    remote: Arc<dyn RemoteApi>,
    flusher: Flusher,
}

impl ContentStore {
    /// Rehydrates from the persisted record, or seeds the catalog on first
    /// launch. Must run before any screen reads content.
    pub async fn open(
        storage: Arc<dyn StateStorage>,
        remote: Arc<dyn RemoteApi>,
    ) -> StorageResult<Self> {
        let state = match storage.load(CONTENT_STORAGE_KEY).await? {
            Some(raw) => match serde_json::from_str::<ContentState>(&raw) {
                Ok(state) => state,
                Err(err) => {
                    warn!("discarding unreadable content record, reseeding: {err}");
                    ContentState::seeded()
                }
            },
            None => {
                info!("no persisted catalog found, seeding initial content");
                ContentState::seeded()
            }
        };
        Ok(Self::from_state(state, storage, remote))
    }

    /// Builds a store over explicit state. Lets tests construct isolated
    /// instances without touching the seed catalog.
    pub fn from_state(
        state: ContentState,
        storage: Arc<dyn StateStorage>,
        remote: Arc<dyn RemoteApi>,
    ) -> Self {
        Self {
            state: RwLock::new(state),
            remote,
            flusher: Flusher::spawn(storage, CONTENT_STORAGE_KEY),
        }
    }

    /// Waits until every mutation made so far has been handed to storage.
    pub async fn flush(&self) {
        self.flusher.flush().await;
    }

    /// Owned copy of the full state, mainly for persistence round-trip
    /// assertions.
    pub fn snapshot(&self) -> ContentState {
        self.state.read().clone()
    }

    pub fn last_updated(&self) -> String {
        self.state.read().last_updated.clone()
    }

    /// Applies a mutation, stamps `lastUpdated`, and schedules the
    /// write-behind persistence of the new snapshot.
    fn commit<R>(&self, mutate: impl FnOnce(&mut ContentState) -> R) -> R {
        let (result, snapshot) = {
            let mut state = self.state.write();
            let result = mutate(&mut state);
            state.last_updated = now_iso();
            (result, serde_json::to_string(&*state))
        };
        match snapshot {
            Ok(snapshot) => self.flusher.schedule(snapshot),
            Err(err) => warn!("content snapshot serialization failed: {err}"),
        }
        result
    }

    // ----- collections ------------------------------------------------------

    pub fn courses(&self) -> Vec<Course> {
        self.state.read().courses.clone()
    }

    pub fn meditations(&self) -> Vec<Meditation> {
        self.state.read().meditations.clone()
    }

    pub fn instructors(&self) -> Vec<Instructor> {
        self.state.read().instructors.clone()
    }

    pub fn categories(&self) -> Vec<Category> {
        self.state.read().categories.clone()
    }

    pub fn metaphor_cards(&self) -> Vec<MetaphorCard> {
        self.state.read().metaphor_cards.clone()
    }

    pub fn archangel_cards(&self) -> Vec<MetaphorCard> {
        self.state.read().archangel_cards.clone()
    }

    pub fn amu_mom_cards(&self) -> Vec<MetaphorCard> {
        self.state.read().amu_mom_cards.clone()
    }

    pub fn civilizations(&self) -> Vec<Civilization> {
        self.state.read().civilizations.clone()
    }

    pub fn constellations(&self) -> Vec<Constellation> {
        self.state.read().constellations.clone()
    }

    // ----- derived views (recomputed on every call) -------------------------

    pub fn featured_courses(&self) -> Vec<Course> {
        self.state
            .read()
            .courses
            .iter()
            .filter(|course| course.is_featured)
            .cloned()
            .collect()
    }

    pub fn featured_meditations(&self) -> Vec<Meditation> {
        self.state
            .read()
            .meditations
            .iter()
            .filter(|meditation| meditation.is_featured)
            .cloned()
            .collect()
    }

    // ----- course mutations -------------------------------------------------

    pub fn add_course(&self, course: Course) {
        self.commit(|state| state.courses.push(course));
    }

    pub fn update_course(&self, id: &str, patch: CoursePatch) {
        self.commit(|state| {
            if let Some(course) = state.courses.iter_mut().find(|c| c.id == id) {
                patch.apply(course);
            }
        });
    }

    pub fn delete_course(&self, id: &str) {
        self.commit(|state| state.courses.retain(|c| c.id != id));
    }

    // ----- meditation mutations ---------------------------------------------

    pub fn add_meditation(&self, meditation: Meditation) {
        self.commit(|state| state.meditations.push(meditation));
    }

    pub fn update_meditation(&self, id: &str, patch: MeditationPatch) {
        self.commit(|state| {
            if let Some(meditation) = state.meditations.iter_mut().find(|m| m.id == id) {
                patch.apply(meditation);
            }
        });
    }

    pub fn delete_meditation(&self, id: &str) {
        self.commit(|state| state.meditations.retain(|m| m.id != id));
    }

    // ----- instructor mutations ---------------------------------------------

    pub fn add_instructor(&self, instructor: Instructor) {
        self.commit(|state| state.instructors.push(instructor));
    }

    pub fn update_instructor(&self, id: &str, patch: InstructorPatch) {
        self.commit(|state| {
            if let Some(instructor) = state.instructors.iter_mut().find(|i| i.id == id) {
                patch.apply(instructor);
            }
        });
    }

    /// Deleting an instructor does not cascade to their courses or
    /// meditations; those keep the dangling instructor id.
    pub fn delete_instructor(&self, id: &str) {
        self.commit(|state| state.instructors.retain(|i| i.id != id));
    }

    // ----- metaphor card mutations (three-way deck routing) -----------------

    /// New cards land in the collection named by their `deck` field; any
    /// value other than archangels/amu-mom means the cosmic default deck.
    pub fn add_metaphor_card(&self, card: MetaphorCard) {
        self.commit(|state| match card.deck {
            Deck::Archangels => state.archangel_cards.push(card),
            Deck::AmuMom => state.amu_mom_cards.push(card),
            Deck::Cosmic => state.metaphor_cards.push(card),
        });
    }

    /// Updates route to the archangels collection when the patch names it or
    /// the card already lives there, then likewise for amu-mom, then the
    /// cosmic default. A patch that does not name a deck therefore updates
    /// the card in place and never moves it between collections, even when
    /// its stored `deck` value disagrees with the collection it sits in.
    /// Long-standing behavior the admin screens rely on; keep as is.
    pub fn update_metaphor_card(&self, id: &str, patch: MetaphorCardPatch) {
        self.commit(|state| {
            let cards = if patch.deck == Some(Deck::Archangels)
                || state.archangel_cards.iter().any(|c| c.id == id)
            {
                &mut state.archangel_cards
            } else if patch.deck == Some(Deck::AmuMom)
                || state.amu_mom_cards.iter().any(|c| c.id == id)
            {
                &mut state.amu_mom_cards
            } else {
                &mut state.metaphor_cards
            };
            if let Some(card) = cards.iter_mut().find(|c| c.id == id) {
                patch.apply(card);
            }
        });
    }

    /// Removes the card from the first collection holding it, searching
    /// archangels, then amu-mom, then the cosmic default.
    pub fn delete_metaphor_card(&self, id: &str) {
        self.commit(|state| {
            if state.archangel_cards.iter().any(|c| c.id == id) {
                state.archangel_cards.retain(|c| c.id != id);
            } else if state.amu_mom_cards.iter().any(|c| c.id == id) {
                state.amu_mom_cards.retain(|c| c.id != id);
            } else {
                state.metaphor_cards.retain(|c| c.id != id);
            }
        });
    }

    // ----- civilization / constellation mutations ---------------------------

    pub fn add_civilization(&self, civilization: Civilization) {
        self.commit(|state| state.civilizations.push(civilization));
    }

    pub fn update_civilization(&self, id: &str, patch: CivilizationPatch) {
        self.commit(|state| {
            if let Some(civilization) = state.civilizations.iter_mut().find(|c| c.id == id) {
                patch.apply(civilization);
            }
        });
    }

    pub fn delete_civilization(&self, id: &str) {
        self.commit(|state| state.civilizations.retain(|c| c.id != id));
    }

    pub fn add_constellation(&self, constellation: Constellation) {
        self.commit(|state| state.constellations.push(constellation));
    }

    pub fn update_constellation(&self, id: &str, patch: ConstellationPatch) {
        self.commit(|state| {
            if let Some(constellation) = state.constellations.iter_mut().find(|c| c.id == id) {
                patch.apply(constellation);
            }
        });
    }

    pub fn delete_constellation(&self, id: &str) {
        self.commit(|state| state.constellations.retain(|c| c.id != id));
    }

    // ----- lookups ----------------------------------------------------------

    pub fn get_course(&self, id: &str) -> Option<Course> {
        self.state.read().courses.iter().find(|c| c.id == id).cloned()
    }

    pub fn get_meditation(&self, id: &str) -> Option<Meditation> {
        self.state
            .read()
            .meditations
            .iter()
            .find(|m| m.id == id)
            .cloned()
    }

    pub fn get_instructor(&self, id: &str) -> Option<Instructor> {
        self.state
            .read()
            .instructors
            .iter()
            .find(|i| i.id == id)
            .cloned()
    }

    /// An archangels or amu-mom hint restricts the search to that deck; a
    /// cosmic hint or none searches the cosmic deck first, then the other
    /// two.
    pub fn get_metaphor_card(&self, id: &str, deck_hint: Option<Deck>) -> Option<MetaphorCard> {
        let state = self.state.read();
        match deck_hint {
            Some(Deck::Archangels) => state.archangel_cards.iter().find(|c| c.id == id).cloned(),
            Some(Deck::AmuMom) => state.amu_mom_cards.iter().find(|c| c.id == id).cloned(),
            _ => state
                .metaphor_cards
                .iter()
                .find(|c| c.id == id)
                .or_else(|| state.archangel_cards.iter().find(|c| c.id == id))
                .or_else(|| state.amu_mom_cards.iter().find(|c| c.id == id))
                .cloned(),
        }
    }

    pub fn get_civilization(&self, id: &str) -> Option<Civilization> {
        self.state
            .read()
            .civilizations
            .iter()
            .find(|c| c.id == id)
            .cloned()
    }

    pub fn get_constellation(&self, id: &str) -> Option<Constellation> {
        self.state
            .read()
            .constellations
            .iter()
            .find(|c| c.id == id)
            .cloned()
    }

    pub fn courses_by_instructor(&self, instructor_id: &str) -> Vec<Course> {
        self.state
            .read()
            .courses
            .iter()
            .filter(|course| course.instructor_id == instructor_id)
            .cloned()
            .collect()
    }

    pub fn meditations_by_instructor(&self, instructor_id: &str) -> Vec<Meditation> {
        self.state
            .read()
            .meditations
            .iter()
            .filter(|meditation| meditation.instructor_id == instructor_id)
            .cloned()
            .collect()
    }

    /// Courses are tagged with the category *name*; resolve the id first and
    /// return nothing for an unknown category.
    pub fn courses_by_category(&self, category_id: &str) -> Vec<Course> {
        let state = self.state.read();
        let Some(category) = state.categories.iter().find(|c| c.id == category_id) else {
            return vec![];
        };
        state
            .courses
            .iter()
            .filter(|course| course.category == category.name)
            .cloned()
            .collect()
    }

    pub fn meditations_by_category(&self, category_id: &str) -> Vec<Meditation> {
        let state = self.state.read();
        let Some(category) = state.categories.iter().find(|c| c.id == category_id) else {
            return vec![];
        };
        state
            .meditations
            .iter()
            .filter(|meditation| meditation.category == category.name)
            .cloned()
            .collect()
    }

    pub fn civilizations_by_constellation(&self, constellation_id: &str) -> Vec<Civilization> {
        let state = self.state.read();
        if !state.constellations.iter().any(|c| c.id == constellation_id) {
            return vec![];
        }
        state
            .civilizations
            .iter()
            .filter(|civilization| civilization.constellation_id == constellation_id)
            .cloned()
            .collect()
    }

    // ----- admin save paths (the `"new"` sentinel contract) -----------------

    /// Saves an edit-form draft. The `"new"` sentinel id mints a real id and
    /// creates the course; any other id updates every editable field of the
    /// existing course. Returns the entity as stored.
    pub fn save_course(&self, mut draft: Course) -> Course {
        draft.updated_at = now_iso();
        if draft.id == NEW_ID {
            draft.id = generate_entity_id();
            draft.created_at = draft.updated_at.clone();
            self.add_course(draft.clone());
        } else {
            self.update_course(&draft.id.clone(), CoursePatch::from_course(&draft));
        }
        draft
    }

    pub fn save_meditation(&self, mut draft: Meditation) -> Meditation {
        draft.updated_at = now_iso();
        if draft.id == NEW_ID {
            draft.id = generate_entity_id();
            draft.created_at = draft.updated_at.clone();
            self.add_meditation(draft.clone());
        } else {
            self.update_meditation(&draft.id.clone(), MeditationPatch::from_meditation(&draft));
        }
        draft
    }

    pub fn save_instructor(&self, mut draft: Instructor) -> Instructor {
        if draft.id == NEW_ID {
            draft.id = generate_entity_id();
            self.add_instructor(draft.clone());
        } else {
            self.update_instructor(&draft.id.clone(), InstructorPatch::from_instructor(&draft));
        }
        draft
    }

    // ----- sync seams -------------------------------------------------------

    /// Overwrites any collection present in the delta and refreshes
    /// `lastUpdated`.
    pub fn sync_content(&self, delta: ContentDelta) {
        self.commit(|state| {
            if let Some(courses) = delta.courses {
                state.courses = courses;
            }
            if let Some(meditations) = delta.meditations {
                state.meditations = meditations;
            }
            if let Some(instructors) = delta.instructors {
                state.instructors = instructors;
            }
            if let Some(categories) = delta.categories {
                state.categories = categories;
            }
            if let Some(metaphor_cards) = delta.metaphor_cards {
                state.metaphor_cards = metaphor_cards;
            }
            if let Some(archangel_cards) = delta.archangel_cards {
                state.archangel_cards = archangel_cards;
            }
            if let Some(amu_mom_cards) = delta.amu_mom_cards {
                state.amu_mom_cards = amu_mom_cards;
            }
            if let Some(civilizations) = delta.civilizations {
                state.civilizations = civilizations;
            }
            if let Some(constellations) = delta.constellations {
                state.constellations = constellations;
            }
        });
    }

    /// Polls the backend seam for fresher content. Failures surface as
    /// `false`, never as an error, so call sites branch on one boolean.
    pub async fn check_for_updates(&self) -> bool {
        match self.remote.check_content_updates().await {
            Ok(has_updates) => has_updates,
            Err(err) => {
                warn!("content update check failed: {err}");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CardMeaning, Lesson};
    use crate::remote::StubRemoteApi;
    use crate::storage::MemoryStorage;

    fn store() -> ContentStore {
        ContentStore::from_state(
            ContentState::default(),
            Arc::new(MemoryStorage::new()),
            Arc::new(StubRemoteApi::instant()),
        )
    }

    fn course(id: &str, featured: bool, price: u32) -> Course {
        Course {
            id: id.to_string(),
            title: format!("Курс {id}"),
            description: String::new(),
            cover_image: String::new(),
            instructor_id: "1".to_string(),
            price,
            is_featured: featured,
            lessons: vec![],
            category: "Чакры".to_string(),
            tags: vec![],
            rating: 4.5,
            review_count: 10,
            created_at: now_iso(),
            updated_at: now_iso(),
        }
    }

    fn meditation(id: &str, featured: bool) -> Meditation {
        Meditation {
            id: id.to_string(),
            title: format!("Медитация {id}"),
            description: String::new(),
            cover_image: String::new(),
            instructor_id: "1".to_string(),
            duration: 20,
            audio_url: "path/to/audio.mp3".to_string(),
            price: 0,
            is_featured: featured,
            category: "Чакры".to_string(),
            tags: vec![],
            rating: 4.0,
            review_count: 3,
            created_at: now_iso(),
            updated_at: now_iso(),
        }
    }

    fn card(id: &str, deck: Deck) -> MetaphorCard {
        MetaphorCard {
            id: id.to_string(),
            name: format!("Карта {id}"),
            image: String::new(),
            description: String::new(),
            meaning: CardMeaning {
                upright: "Свет".to_string(),
                reversed: None,
            },
            keywords: vec![],
            category: "Путь".to_string(),
            deck,
        }
    }

    fn category(id: &str, name: &str) -> Category {
        Category {
            id: id.to_string(),
            name: name.to_string(),
            description: String::new(),
            icon: Default::default(),
        }
    }

    #[tokio::test]
    async fn featured_views_track_the_flag() {
        let store = store();
        store.add_course(course("1", true, 0));
        store.add_course(course("2", false, 0));
        store.add_meditation(meditation("1", false));
        store.add_meditation(meditation("2", true));

        let featured: Vec<String> = store.featured_courses().into_iter().map(|c| c.id).collect();
        assert_eq!(featured, vec!["1"]);

        // Recomputed on every read, no stale cache after a mutation.
        store.update_course(
            "2",
            CoursePatch {
                is_featured: Some(true),
                ..Default::default()
            },
        );
        assert_eq!(store.featured_courses().len(), 2);
        assert_eq!(store.featured_meditations().len(), 1);
    }

    #[tokio::test]
    async fn update_patches_only_named_fields() {
        let store = store();
        store.add_course(course("1", false, 2900));
        store.update_course(
            "1",
            CoursePatch {
                title: Some("Новое название".to_string()),
                ..Default::default()
            },
        );

        let updated = store.get_course("1").unwrap();
        assert_eq!(updated.title, "Новое название");
        assert_eq!(updated.price, 2900);
        assert_eq!(updated.rating, 4.5);
    }

    #[tokio::test]
    async fn update_of_unknown_id_is_silent() {
        let store = store();
        store.add_course(course("1", false, 0));
        store.update_course(
            "missing",
            CoursePatch {
                title: Some("X".to_string()),
                ..Default::default()
            },
        );
        assert_eq!(store.courses().len(), 1);
        assert_eq!(store.get_course("1").unwrap().title, "Курс 1");
    }

    #[tokio::test]
    async fn deletes_are_idempotent_across_collections() {
        let store = store();
        store.add_course(course("1", false, 0));
        store.delete_course("missing");
        store.delete_meditation("missing");
        store.delete_instructor("missing");
        store.delete_metaphor_card("missing");
        store.delete_civilization("missing");
        store.delete_constellation("missing");
        assert_eq!(store.courses().len(), 1);

        store.delete_course("1");
        store.delete_course("1");
        assert!(store.courses().is_empty());
    }

    #[tokio::test]
    async fn cards_route_to_the_deck_collection_on_add() {
        let store = store();
        store.add_metaphor_card(card("c1", Deck::Cosmic));
        store.add_metaphor_card(card("a1", Deck::Archangels));
        store.add_metaphor_card(card("m1", Deck::AmuMom));

        assert!(store.get_metaphor_card("a1", Some(Deck::Archangels)).is_some());
        assert!(store.get_metaphor_card("a1", Some(Deck::AmuMom)).is_none());
        assert!(store.get_metaphor_card("m1", Some(Deck::AmuMom)).is_some());
        assert!(store.get_metaphor_card("m1", Some(Deck::Archangels)).is_none());
        assert_eq!(store.metaphor_cards().len(), 1);

        // No hint falls back to searching all three decks.
        assert!(store.get_metaphor_card("a1", None).is_some());
        assert!(store.get_metaphor_card("m1", None).is_some());
        assert!(store.get_metaphor_card("c1", Some(Deck::Cosmic)).is_some());
    }

    #[tokio::test]
    async fn update_without_deck_keeps_card_in_its_collection() {
        let store = store();
        store.add_metaphor_card(card("a1", Deck::Archangels));

        store.update_metaphor_card(
            "a1",
            MetaphorCardPatch {
                name: Some("X".to_string()),
                ..Default::default()
            },
        );

        let updated = store.get_metaphor_card("a1", Some(Deck::Archangels)).unwrap();
        assert_eq!(updated.name, "X");
        assert!(store.amu_mom_cards().is_empty());
        assert!(store.metaphor_cards().is_empty());
    }

    #[tokio::test]
    async fn explicit_deck_in_patch_routes_before_lookup() {
        let store = store();
        store.add_metaphor_card(card("c1", Deck::Cosmic));

        // Patch names archangels, so the cosmic-resident card is untouched:
        // the update maps over the archangels collection, where the id does
        // not exist.
        store.update_metaphor_card(
            "c1",
            MetaphorCardPatch {
                name: Some("X".to_string()),
                deck: Some(Deck::Archangels),
                ..Default::default()
            },
        );
        assert_eq!(store.get_metaphor_card("c1", None).unwrap().name, "Карта c1");
    }

    #[tokio::test]
    async fn delete_card_searches_decks_in_order() {
        let store = store();
        store.add_metaphor_card(card("x", Deck::Archangels));
        store.add_metaphor_card(card("x", Deck::Cosmic));

        // First hit wins: archangels copy goes, cosmic copy stays.
        store.delete_metaphor_card("x");
        assert!(store.archangel_cards().is_empty());
        assert_eq!(store.metaphor_cards().len(), 1);

        store.delete_metaphor_card("x");
        assert!(store.metaphor_cards().is_empty());
    }

    #[tokio::test]
    async fn category_queries_resolve_the_name_indirection() {
        let store = store();
        store.add_course(course("1", false, 0));
        store.sync_content(ContentDelta {
            categories: Some(vec![category("cat-1", "Чакры")]),
            ..Default::default()
        });

        assert_eq!(store.courses_by_category("cat-1").len(), 1);
        assert!(store.courses_by_category("cat-unknown").is_empty());
        assert!(store.meditations_by_category("cat-1").is_empty());
    }

    #[tokio::test]
    async fn instructor_queries_filter_by_foreign_key() {
        let store = store();
        store.add_course(course("1", false, 0));
        let mut other = course("2", false, 0);
        other.instructor_id = "2".to_string();
        store.add_course(other);

        let ids: Vec<String> = store
            .courses_by_instructor("1")
            .into_iter()
            .map(|c| c.id)
            .collect();
        assert_eq!(ids, vec!["1"]);
    }

    #[tokio::test]
    async fn save_course_mints_id_for_the_new_sentinel() {
        let store = store();
        let mut draft = course(NEW_ID, false, 0);
        draft.lessons = (1..=3)
            .map(|i| Lesson {
                id: format!("l{i}"),
                title: format!("Урок {i}"),
                description: String::new(),
                duration: 30,
                audio_url: String::new(),
                order: i,
            })
            .collect();

        let saved = store.save_course(draft);

        assert_ne!(saved.id, NEW_ID);
        assert_eq!(store.courses().len(), 1);
        let stored = store.get_course(&saved.id).unwrap();
        let orders: Vec<u32> = stored.lessons.iter().map(|l| l.order).collect();
        assert_eq!(orders, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn save_course_with_real_id_updates_in_place() {
        let store = store();
        store.add_course(course("1", false, 2900));

        let mut draft = store.get_course("1").unwrap();
        draft.title = "Отредактировано".to_string();
        let saved = store.save_course(draft);

        assert_eq!(saved.id, "1");
        assert_eq!(store.courses().len(), 1);
        assert_eq!(store.get_course("1").unwrap().title, "Отредактировано");
    }

    #[tokio::test]
    async fn sync_content_overwrites_named_collections_only() {
        let store = store();
        store.add_course(course("1", false, 0));
        store.add_meditation(meditation("1", false));

        store.sync_content(ContentDelta {
            courses: Some(vec![course("9", true, 0)]),
            ..Default::default()
        });

        let ids: Vec<String> = store.courses().into_iter().map(|c| c.id).collect();
        assert_eq!(ids, vec!["9"]);
        assert_eq!(store.meditations().len(), 1);
    }

    #[tokio::test]
    async fn check_for_updates_reports_the_stub_result() {
        let store = store();
        assert!(store.check_for_updates().await);
    }

    #[tokio::test]
    async fn persisted_snapshot_round_trips() {
        let storage = Arc::new(MemoryStorage::new());
        let store = ContentStore::from_state(
            ContentState::default(),
            storage.clone(),
            Arc::new(StubRemoteApi::instant()),
        );
        store.add_course(course("1", true, 2900));
        store.add_metaphor_card(card("a1", Deck::Archangels));
        store.flush().await;
        let original = store.snapshot();
        drop(store);

        let reopened = ContentStore::open(storage, Arc::new(StubRemoteApi::instant()))
            .await
            .unwrap();
        assert_eq!(reopened.snapshot(), original);
    }
}
