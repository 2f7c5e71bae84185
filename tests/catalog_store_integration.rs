use celesta::logic::validate_course;
use celesta::model::{Course, Deck, Lesson, NEW_ID};
use celesta::remote::{NoopReloader, Platform, StubRemoteApi};
use celesta::storage::MemoryStorage;
use celesta::store::{AuthStore, ContentStore};
use std::sync::Arc;

fn draft_lesson(id: &str, title: &str, order: u32) -> Lesson {
    Lesson {
        id: id.to_string(),
        title: title.to_string(),
        description: String::new(),
        duration: 30,
        audio_url: format!("path/to/{id}.mp3"),
        order,
    }
}

#[tokio::test]
async fn test_catalog_complete_workflow() {
    let storage = Arc::new(MemoryStorage::new());
    let remote = Arc::new(StubRemoteApi::instant());

    // Step 1: first launch seeds the catalog
    println!("1. Opening content store on empty storage");
    let content = ContentStore::open(storage.clone(), remote.clone())
        .await
        .expect("open content store");
    assert_eq!(content.courses().len(), 4);
    assert_eq!(content.meditations().len(), 7);
    assert_eq!(content.instructors().len(), 3);
    assert_eq!(content.constellations().len(), 8);
    assert!(!content.featured_courses().is_empty());

    // Step 2: demo login and the paywall predicate
    println!("2. Logging in and checking course entitlement");
    let auth = AuthStore::open(
        storage.clone(),
        remote.clone(),
        Arc::new(NoopReloader),
        Platform::Ios,
    )
    .await
    .expect("open auth store");
    assert!(auth.login("user@example.com", "password").await);
    let user = auth.user().expect("logged-in user");

    let free = content.get_course("4").expect("seeded free course");
    let paid = content.get_course("1").expect("seeded paid course");
    let purchased = content.get_course("2").expect("seeded purchased course");
    assert_eq!(free.price, 0);
    assert!(user.owns_course(&free), "free course is open to everyone");
    assert!(!user.owns_course(&paid), "unpurchased paid course is locked");
    assert!(user.owns_course(&purchased), "purchased course is unlocked");

    // Step 3: admin creates a course through the "new" sentinel
    println!("3. Creating a course via the edit-form save path");
    auth.toggle_admin();
    assert!(auth.is_admin());

    let mut draft = Course {
        id: NEW_ID.to_string(),
        title: "Звуки глубокого космоса".to_string(),
        description: "Курс работы со звуковыми ландшафтами дальнего космоса.".to_string(),
        cover_image: "https://example.com/deep-space.jpg".to_string(),
        instructor_id: "3".to_string(),
        price: 1900,
        is_featured: false,
        lessons: vec![],
        category: "Космическая энергия".to_string(),
        tags: vec!["Звук".to_string(), "Космос".to_string()],
        rating: 0.0,
        review_count: 0,
        created_at: String::new(),
        updated_at: String::new(),
    };

    // The form blocks saving until validation passes.
    assert!(!validate_course(&draft).is_valid());
    draft.lessons = vec![
        draft_lesson("n-1", "Настройка слуха", 1),
        draft_lesson("n-2", "Голоса пульсаров", 2),
        draft_lesson("n-3", "Тишина между звездами", 3),
    ];
    assert!(validate_course(&draft).is_valid());

    let saved = content.save_course(draft);
    assert_ne!(saved.id, NEW_ID);
    assert_eq!(content.courses().len(), 5);
    let stored = content.get_course(&saved.id).expect("created course");
    let orders: Vec<u32> = stored.lessons.iter().map(|l| l.order).collect();
    assert_eq!(orders, vec![1, 2, 3]);

    // Step 4: deleting a lesson renumbers the remainder
    println!("4. Deleting the middle lesson");
    let mut edited = stored.clone();
    edited.remove_lesson("n-2");
    let saved_again = content.save_course(edited);
    let after = content.get_course(&saved_again.id).expect("edited course");
    assert_eq!(after.lessons.len(), 2);
    let orders: Vec<u32> = after.lessons.iter().map(|l| l.order).collect();
    assert_eq!(orders, vec![1, 2]);
    let titles: Vec<&str> = after.lessons.iter().map(|l| l.title.as_str()).collect();
    assert_eq!(titles, vec!["Настройка слуха", "Тишина между звездами"]);

    // Step 5: metaphor card deck routing
    println!("5. Routing a new card into the archangels deck");
    let mut card = content
        .get_metaphor_card("arch-1", Some(Deck::Archangels))
        .expect("seeded archangel card");
    card.id = "arch-new".to_string();
    card.name = "Архангел Уриил".to_string();
    content.add_metaphor_card(card);
    assert!(content
        .get_metaphor_card("arch-new", Some(Deck::Archangels))
        .is_some());
    assert!(content
        .get_metaphor_card("arch-new", Some(Deck::AmuMom))
        .is_none());
    assert!(content.get_metaphor_card("arch-new", None).is_some());

    // Step 6: admin publish reaches the stub backend
    println!("6. Publishing the content update");
    assert!(auth.publish_content_update().await);
    assert!(auth.last_sync().is_some());

    // Step 7: restart — both stores rehydrate from the persisted snapshots
    println!("7. Flushing and reopening over the same storage");
    content.flush().await;
    auth.flush().await;
    let content_before = content.snapshot();
    let auth_before = auth.snapshot();
    drop(content);
    drop(auth);

    let content = ContentStore::open(storage.clone(), remote.clone())
        .await
        .expect("reopen content store");
    let auth = AuthStore::open(storage, remote, Arc::new(NoopReloader), Platform::Ios)
        .await
        .expect("reopen auth store");

    assert_eq!(content.snapshot(), content_before, "content round-trip");
    assert_eq!(auth.snapshot(), auth_before, "session round-trip");
    assert_eq!(content.courses().len(), 5, "admin edit survived the restart");
    assert!(auth.is_authenticated());
    assert!(auth.is_admin());

    println!("catalog workflow complete");
}

#[tokio::test]
async fn test_second_launch_ignores_the_seed() {
    let storage = Arc::new(MemoryStorage::new());
    let remote = Arc::new(StubRemoteApi::instant());

    let content = ContentStore::open(storage.clone(), remote.clone())
        .await
        .expect("first open");
    // Admin strips the catalog down to nothing.
    for course in content.courses() {
        content.delete_course(&course.id);
    }
    content.flush().await;
    drop(content);

    let reopened = ContentStore::open(storage, remote).await.expect("reopen");
    assert!(
        reopened.courses().is_empty(),
        "persisted state wins over the static seed"
    );
    assert_eq!(reopened.meditations().len(), 7);
}
