//! Static catalog the store is populated with on first launch. After that
//! the persisted snapshot is the source of truth and this data is never
//! consulted again.

use crate::model::{
    CardDeck, CardMeaning, Category, CategoryIcon, Civilization, Constellation, Course, Deck,
    Instructor, Lesson, Meditation, MetaphorCard, SkyCoordinates,
};

fn lesson(id: &str, title: &str, description: &str, duration: u32, audio_url: &str, order: u32) -> Lesson {
    Lesson {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        duration,
        audio_url: audio_url.to_string(),
        order,
    }
}

pub fn courses() -> Vec<Course> {
    vec![
        Course {
            id: "1".to_string(),
            title: "Путь к звездам Плеяд".to_string(),
            description: "Курс глубокого погружения в космическую энергию созвездия Плеяд. Вы научитесь устанавливать связь с высшими энергиями и применять их для трансформации своей жизни.".to_string(),
            cover_image: "https://images.unsplash.com/photo-1462331940025-496dfbfc7564?auto=format&fit=crop&w=1211&q=80".to_string(),
            instructor_id: "1".to_string(),
            price: 2900,
            is_featured: true,
            lessons: vec![
                lesson("1-1", "Введение в энергию Плеяд", "Знакомство с историей и энергетическим влиянием созвездия Плеяд на Землю и человечество.", 45, "path/to/audio1.mp3", 1),
                lesson("1-2", "Первый контакт", "Техники установления первичного энергетического контакта с Плеядами.", 35, "path/to/audio2.mp3", 2),
                lesson("1-3", "Глубокое погружение", "Медитативные практики для глубокого погружения в энергетическое поле Плеяд.", 60, "path/to/audio3.mp3", 3),
            ],
            category: "Космическая энергия".to_string(),
            tags: vec!["Плеяды".to_string(), "Космос".to_string(), "Энергия".to_string(), "Трансформация".to_string()],
            rating: 4.8,
            review_count: 124,
            created_at: "2023-01-15T10:00:00Z".to_string(),
            updated_at: "2023-05-20T14:30:00Z".to_string(),
        },
        Course {
            id: "2".to_string(),
            title: "Чакральная гармония".to_string(),
            description: "Курс по балансировке и активации чакр с использованием космической энергии Плеяд. Научитесь чувствовать и направлять энергию для исцеления и развития.".to_string(),
            cover_image: "https://images.unsplash.com/photo-1534447677768-be436bb09401?auto=format&fit=crop&w=1170&q=80".to_string(),
            instructor_id: "2".to_string(),
            price: 3500,
            is_featured: true,
            lessons: vec![
                lesson("2-1", "Основы чакральной системы", "Изучение семи основных чакр и их влияния на физическое и энергетическое тело.", 40, "path/to/audio4.mp3", 1),
                lesson("2-2", "Муладхара и Свадхистана", "Работа с корневой и сакральной чакрами для укрепления жизненной силы.", 55, "path/to/audio5.mp3", 2),
            ],
            category: "Чакры".to_string(),
            tags: vec!["Чакры".to_string(), "Энергия".to_string(), "Исцеление".to_string(), "Баланс".to_string()],
            rating: 4.9,
            review_count: 87,
            created_at: "2023-02-10T09:15:00Z".to_string(),
            updated_at: "2023-06-05T11:45:00Z".to_string(),
        },
        Course {
            id: "3".to_string(),
            title: "Астральные путешествия".to_string(),
            description: "Курс по технике астральных путешествий и выхода из тела. Научитесь безопасно исследовать тонкие миры и возвращаться обогащенными новым опытом.".to_string(),
            cover_image: "https://images.unsplash.com/photo-1505506874110-6a7a69069a08?auto=format&fit=crop&w=687&q=80".to_string(),
            instructor_id: "1".to_string(),
            price: 4200,
            is_featured: false,
            lessons: vec![
                lesson("3-1", "Подготовка к астральному выходу", "Техники расслабления и подготовки сознания к астральному путешествию.", 50, "path/to/audio6.mp3", 1),
                lesson("3-2", "Первый выход", "Пошаговая инструкция для первого безопасного астрального путешествия.", 65, "path/to/audio7.mp3", 2),
            ],
            category: "Астральные практики".to_string(),
            tags: vec!["Астрал".to_string(), "Путешествия".to_string(), "Выход из тела".to_string(), "Тонкие миры".to_string()],
            rating: 4.7,
            review_count: 56,
            created_at: "2023-03-05T14:20:00Z".to_string(),
            updated_at: "2023-07-12T16:10:00Z".to_string(),
        },
        Course {
            id: "4".to_string(),
            title: "Квантовая медитация".to_string(),
            description: "Инновационный курс, объединяющий современные научные знания о квантовой физике с древними медитативными практиками для расширения сознания.".to_string(),
            cover_image: "https://images.unsplash.com/photo-1614728263952-84ea256f9679?auto=format&fit=crop&w=1074&q=80".to_string(),
            instructor_id: "3".to_string(),
            price: 0, // free course
            is_featured: true,
            lessons: vec![
                lesson("4-1", "Квантовая теория и сознание", "Введение в основы квантовой физики и ее связь с человеческим сознанием.", 45, "path/to/audio8.mp3", 1),
                lesson("4-2", "Практика квантовой медитации", "Техники медитации, основанные на принципах квантовой физики.", 40, "path/to/audio9.mp3", 2),
            ],
            category: "Научная эзотерика".to_string(),
            tags: vec!["Квантовая физика".to_string(), "Наука".to_string(), "Сознание".to_string(), "Медитация".to_string()],
            rating: 4.6,
            review_count: 42,
            created_at: "2023-04-18T11:30:00Z".to_string(),
            updated_at: "2023-08-01T09:45:00Z".to_string(),
        },
    ]
}

#[allow(clippy::too_many_arguments)]
fn meditation(
    id: &str,
    title: &str,
    description: &str,
    cover_image: &str,
    instructor_id: &str,
    duration: u32,
    price: u32,
    is_featured: bool,
    category: &str,
    tags: &[&str],
    rating: f32,
    review_count: u32,
    created_at: &str,
    updated_at: &str,
) -> Meditation {
    Meditation {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        cover_image: cover_image.to_string(),
        instructor_id: instructor_id.to_string(),
        duration,
        audio_url: format!("path/to/meditation{id}.mp3"),
        price,
        is_featured,
        category: category.to_string(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        rating,
        review_count,
        created_at: created_at.to_string(),
        updated_at: updated_at.to_string(),
    }
}

pub fn meditations() -> Vec<Meditation> {
    vec![
        meditation(
            "1",
            "Связь с Плеядами",
            "Глубокая медитация для установления энергетического контакта с созвездием Плеяд и приема его исцеляющих вибраций.",
            "https://images.unsplash.com/photo-1532798442725-41036acc7489?auto=format&fit=crop&w=1167&q=80",
            "1", 30, 590, true,
            "Космическая энергия", &["Плеяды", "Контакт", "Вибрации"],
            4.9, 215, "2023-01-20T08:00:00Z", "2023-05-25T10:15:00Z",
        ),
        meditation(
            "2",
            "Звездное дыхание",
            "Дыхательная практика, синхронизирующая ритм дыхания с пульсацией звездного света.",
            "https://images.unsplash.com/photo-1419242902214-272b3f66ee7a?auto=format&fit=crop&w=1213&q=80",
            "1", 20, 0, true,
            "Космическая энергия", &["Дыхание", "Звезды", "Ритм"],
            4.7, 168, "2023-02-02T09:30:00Z", "2023-06-10T12:00:00Z",
        ),
        meditation(
            "3",
            "Исцеление чакр",
            "Последовательная активация и гармонизация семи чакр с помощью звуковых вибраций и визуализации.",
            "https://images.unsplash.com/photo-1506126613408-eca07ce68773?auto=format&fit=crop&w=1170&q=80",
            "2", 45, 790, true,
            "Чакры", &["Чакры", "Исцеление", "Звук"],
            4.8, 192, "2023-02-15T10:45:00Z", "2023-06-20T14:30:00Z",
        ),
        meditation(
            "4",
            "Золотой свет Плеяд",
            "Медитация наполнения золотым светом для восстановления энергетического поля после тяжелого дня.",
            "https://images.unsplash.com/photo-1519681393784-d120267933ba?auto=format&fit=crop&w=1170&q=80",
            "2", 25, 0, false,
            "Исцеление", &["Свет", "Восстановление", "Защита"],
            4.6, 94, "2023-03-12T11:00:00Z", "2023-07-01T09:20:00Z",
        ),
        meditation(
            "5",
            "Астральная прогулка",
            "Мягкое погружение в пограничное состояние для первого знакомства с астральным планом.",
            "https://images.unsplash.com/photo-1475274047050-1d0c0975c63e?auto=format&fit=crop&w=1172&q=80",
            "1", 40, 690, false,
            "Астральные практики", &["Астрал", "Погружение", "Сон"],
            4.5, 71, "2023-04-01T13:30:00Z", "2023-07-18T15:40:00Z",
        ),
        meditation(
            "6",
            "Квантовое поле возможностей",
            "Практика работы с вероятностными состояниями сознания для выбора желаемой линии жизни.",
            "https://images.unsplash.com/photo-1462332420958-a05d1e002413?auto=format&fit=crop&w=1207&q=80",
            "3", 35, 890, false,
            "Научная эзотерика", &["Квантовая физика", "Выбор", "Сознание"],
            4.7, 103, "2023-04-22T16:00:00Z", "2023-08-05T10:10:00Z",
        ),
        meditation(
            "7",
            "Наблюдатель звездного неба",
            "Созерцательная медитация под ночным небом, возвращающая ощущение масштаба и покоя.",
            "https://images.unsplash.com/photo-1444703686981-a3abbc4d4fe3?auto=format&fit=crop&w=1170&q=80",
            "3", 15, 0, false,
            "Космическая энергия", &["Созерцание", "Покой", "Небо"],
            4.4, 58, "2023-05-09T19:00:00Z", "2023-08-14T18:25:00Z",
        ),
    ]
}

pub fn instructors() -> Vec<Instructor> {
    vec![
        Instructor {
            id: "1".to_string(),
            name: "Алексей Михайлов".to_string(),
            avatar: "https://images.unsplash.com/photo-1568602471122-7832951cc4c5?auto=format&fit=crop&w=1170&q=80".to_string(),
            bio: "Практикующий медитацию более 20 лет. Специализируется на техниках глубокого погружения и связи с космическими энергиями.".to_string(),
            specialties: vec!["Космическая медитация".to_string(), "Энергетические практики".to_string(), "Астральные путешествия".to_string()],
            courses: vec!["1".to_string(), "3".to_string()],
            meditations: vec!["1".to_string(), "2".to_string(), "5".to_string()],
        },
        Instructor {
            id: "2".to_string(),
            name: "Елена Соколова".to_string(),
            avatar: "https://images.unsplash.com/photo-1544005313-94ddf0286df2?auto=format&fit=crop&w=688&q=80".to_string(),
            bio: "Мастер медитации и эзотерических практик. Изучала древние техники в Тибете и Индии. Помогает найти внутреннюю гармонию через связь с космосом.".to_string(),
            specialties: vec!["Чакральная медитация".to_string(), "Плеядианские техники".to_string(), "Звуковая терапия".to_string()],
            courses: vec!["2".to_string()],
            meditations: vec!["3".to_string(), "4".to_string()],
        },
        Instructor {
            id: "3".to_string(),
            name: "Николай Звездин".to_string(),
            avatar: "https://images.unsplash.com/photo-1506794778202-cad84cf45f1d?auto=format&fit=crop&w=687&q=80".to_string(),
            bio: "Астрофизик и духовный практик. Объединяет научные знания о космосе с древними медитативными техниками для достижения высших состояний сознания.".to_string(),
            specialties: vec!["Квантовая медитация".to_string(), "Космическая энергия".to_string(), "Научная эзотерика".to_string()],
            courses: vec!["4".to_string()],
            meditations: vec!["6".to_string(), "7".to_string()],
        },
    ]
}

fn category(id: &str, name: &str, description: &str, icon: CategoryIcon) -> Category {
    Category {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        icon,
    }
}

pub fn categories() -> Vec<Category> {
    vec![
        category("cat-1", "Космическая энергия", "Практики приема и направления энергии звездных систем.", CategoryIcon::Star),
        category("cat-2", "Чакры", "Балансировка и активация энергетических центров тела.", CategoryIcon::CircleDot),
        category("cat-3", "Астральные практики", "Техники осознанного выхода за пределы физического тела.", CategoryIcon::Moon),
        category("cat-4", "Научная эзотерика", "Медитации на стыке современной физики и древних традиций.", CategoryIcon::Atom),
        category("cat-5", "Исцеление", "Восстановление энергетического поля и внутренних ресурсов.", CategoryIcon::Heart),
        category("cat-6", "Защита", "Практики энергетической защиты и очищения пространства.", CategoryIcon::Shield),
    ]
}

#[allow(clippy::too_many_arguments)]
fn card(
    id: &str,
    name: &str,
    image: &str,
    description: &str,
    upright: &str,
    reversed: Option<&str>,
    keywords: &[&str],
    category: &str,
    deck: Deck,
) -> MetaphorCard {
    MetaphorCard {
        id: id.to_string(),
        name: name.to_string(),
        image: image.to_string(),
        description: description.to_string(),
        meaning: CardMeaning {
            upright: upright.to_string(),
            reversed: reversed.map(|r| r.to_string()),
        },
        keywords: keywords.iter().map(|k| k.to_string()).collect(),
        category: category.to_string(),
        deck,
    }
}

pub fn cosmic_cards() -> Vec<MetaphorCard> {
    vec![
        card(
            "cosmic-1", "Звездные врата",
            "https://images.unsplash.com/photo-1419242902214-272b3f66ee7a?auto=format&fit=crop&w=1213&q=80",
            "Портал между мирами, приглашение к переходу на новый уровень.",
            "Перед вами открывается новая возможность — войдите в нее без страха.",
            Some("Вы медлите на пороге перемен, упуская момент перехода."),
            &["Переход", "Возможность", "Начало"], "Путь", Deck::Cosmic,
        ),
        card(
            "cosmic-2", "Пояс Ориона",
            "https://images.unsplash.com/photo-1543722530-d2c3201371e7?auto=format&fit=crop&w=1174&q=80",
            "Три звезды-проводника, выстраивающие события в верном порядке.",
            "События выстраиваются в нужной последовательности — доверьтесь порядку вещей.",
            None,
            &["Порядок", "Доверие", "Путь"], "Путь", Deck::Cosmic,
        ),
        card(
            "cosmic-3", "Семь сестер",
            "https://images.unsplash.com/photo-1534447677768-be436bb09401?auto=format&fit=crop&w=1170&q=80",
            "Скопление Плеяд, символ родства душ и поддержки рода.",
            "Рядом есть близкие по духу — обопритесь на их поддержку.",
            Some("Вы закрылись от помощи, которую вам искренне предлагают."),
            &["Родство", "Поддержка", "Семья"], "Отношения", Deck::Cosmic,
        ),
        card(
            "cosmic-4", "Туманность",
            "https://images.unsplash.com/photo-1462331940025-496dfbfc7564?auto=format&fit=crop&w=1211&q=80",
            "Облако звездной пыли, из которого рождается новое светило.",
            "Неясность сейчас — материал, из которого формируется ваше будущее.",
            Some("Туман в мыслях мешает увидеть уже созревшее решение."),
            &["Неясность", "Рождение", "Потенциал"], "Состояние", Deck::Cosmic,
        ),
    ]
}

pub fn archangel_cards() -> Vec<MetaphorCard> {
    vec![
        card(
            "arch-1", "Архангел Михаил",
            "https://images.unsplash.com/photo-1501281668745-f7f57925c3b4?auto=format&fit=crop&w=1170&q=80",
            "Защитник с огненным мечом, отсекающий страхи и сомнения.",
            "Вы под защитой — действуйте смело, страхи не имеют над вами власти.",
            None,
            &["Защита", "Смелость", "Сила"], "Защита", Deck::Archangels,
        ),
        card(
            "arch-2", "Архангел Гавриил",
            "https://images.unsplash.com/photo-1522075469751-3a6694fb2f61?auto=format&fit=crop&w=880&q=80",
            "Вестник, приносящий ясность и важные известия.",
            "Ожидайте весть, которая прояснит запутанную ситуацию.",
            None,
            &["Весть", "Ясность", "Слово"], "Послание", Deck::Archangels,
        ),
        card(
            "arch-3", "Архангел Рафаил",
            "https://images.unsplash.com/photo-1518756131217-31eb79b20e8f?auto=format&fit=crop&w=1718&q=80",
            "Целитель, восстанавливающий тело и душу изумрудным светом.",
            "Начался процесс исцеления — дайте ему время и покой.",
            None,
            &["Исцеление", "Покой", "Свет"], "Исцеление", Deck::Archangels,
        ),
    ]
}

pub fn amu_mom_cards() -> Vec<MetaphorCard> {
    vec![
        card(
            "amu-1", "Корни",
            "https://images.unsplash.com/photo-1475066392170-59d55d96fe51?auto=format&fit=crop&w=1074&q=80",
            "Дерево, удерживаемое невидимой подземной силой рода.",
            "Ваша опора — в истоках: вспомните, откуда вы.",
            Some("Отрыв от корней лишает вас сил — восстановите связь."),
            &["Род", "Опора", "Истоки"], "Род", Deck::AmuMom,
        ),
        card(
            "amu-2", "Зеркало",
            "https://images.unsplash.com/photo-1438761681033-6461ffad8d80?auto=format&fit=crop&w=1170&q=80",
            "Отражение, показывающее то, что вы не хотите замечать.",
            "Окружающие отражают вам ваш собственный внутренний настрой.",
            Some("Вы приписываете другим то, что живет внутри вас."),
            &["Отражение", "Честность", "Взгляд внутрь"], "Самопознание", Deck::AmuMom,
        ),
        card(
            "amu-3", "Колыбель",
            "https://images.unsplash.com/photo-1465101162946-4377e57745c3?auto=format&fit=crop&w=1178&q=80",
            "Бережное пространство, в котором зреет новое начинание.",
            "Берегите то, что только зарождается — ему нужна тишина.",
            None,
            &["Забота", "Начало", "Тишина"], "Род", Deck::AmuMom,
        ),
    ]
}

pub fn card_decks() -> Vec<CardDeck> {
    vec![
        CardDeck {
            id: "cosmic".to_string(),
            name: "Метафорические карты".to_string(),
            description: "Колода метафорических карт для глубокого самопознания и работы с подсознанием.".to_string(),
            author: "Плеяды".to_string(),
            author_image: "https://images.unsplash.com/photo-1534447677768-be436bb09401?auto=format&fit=crop&w=1170&q=80".to_string(),
            cover_image: "https://images.unsplash.com/photo-1534447677768-be436bb09401?auto=format&fit=crop&w=1170&q=80".to_string(),
            card_count: 12,
            deck_type: Deck::Cosmic,
        },
        CardDeck {
            id: "archangels".to_string(),
            name: "Магические послания архангелов".to_string(),
            description: "Колода карт Дорин Вирче с посланиями и руководством от архангелов для духовного роста и поддержки.".to_string(),
            author: "Дорин Вирче".to_string(),
            author_image: "https://images.unsplash.com/photo-1522075469751-3a6694fb2f61?auto=format&fit=crop&w=880&q=80".to_string(),
            cover_image: "https://images.unsplash.com/photo-1501281668745-f7f57925c3b4?auto=format&fit=crop&w=1170&q=80".to_string(),
            card_count: 10,
            deck_type: Deck::Archangels,
        },
        CardDeck {
            id: "amu-mom".to_string(),
            name: "Метафорическая колода Аму Мом".to_string(),
            description: "Авторская колода карт Аму Мом для глубокого самопознания и работы с внутренним миром.".to_string(),
            author: "Аму Мом".to_string(),
            author_image: "https://images.unsplash.com/photo-1438761681033-6461ffad8d80?auto=format&fit=crop&w=1170&q=80".to_string(),
            cover_image: "https://images.unsplash.com/photo-1518756131217-31eb79b20e8f?auto=format&fit=crop&w=1718&q=80".to_string(),
            card_count: 8,
            deck_type: Deck::AmuMom,
        },
    ]
}

#[allow(clippy::too_many_arguments)]
fn civilization(
    id: &str,
    name: &str,
    constellation_id: &str,
    short_description: &str,
    full_description: &str,
    image_url: &str,
    traits: &[&str],
    history: &str,
) -> Civilization {
    Civilization {
        id: id.to_string(),
        name: name.to_string(),
        constellation_id: constellation_id.to_string(),
        short_description: short_description.to_string(),
        full_description: full_description.to_string(),
        image_url: image_url.to_string(),
        traits: traits.iter().map(|t| t.to_string()).collect(),
        history: history.to_string(),
        created_at: "2023-01-10T00:00:00Z".to_string(),
        updated_at: "2023-01-10T00:00:00Z".to_string(),
    }
}

pub fn civilizations() -> Vec<Civilization> {
    vec![
        civilization(
            "pleiadians", "Плеядеанцы", "pleiades",
            "Светлая цивилизация целителей и наставников человечества.",
            "Плеядеанцы — высокоразвитая цивилизация из звездного скопления Плеяд. Считаются духовными наставниками Земли, передающими знания о целительстве, гармонии и тонких энергиях.",
            "https://images.unsplash.com/photo-1534447677768-be436bb09401?auto=format&fit=crop&w=1170&q=80",
            &["Целительство", "Эмпатия", "Наставничество"],
            "По преданиям, плеядеанцы посещали Землю со времен древних цивилизаций и оставили след в мифах многих народов о семи сестрах.",
        ),
        civilization(
            "lyrans", "Лирианцы", "lyra",
            "Древнейшая раса, прародители многих звездных народов.",
            "Лирианцы считаются одной из первых гуманоидных цивилизаций галактики, от которой произошли многие звездные народы. Хранители первичных знаний о происхождении жизни.",
            "https://images.unsplash.com/photo-1462331940025-496dfbfc7564?auto=format&fit=crop&w=1211&q=80",
            &["Мудрость", "Первородство", "Сила духа"],
            "История лирианцев уходит к истокам галактики; после великих звездных войн их потомки расселились по многим системам.",
        ),
        civilization(
            "orions", "Орионцы", "orion",
            "Воины и стратеги, прошедшие путь от конфликта к равновесию.",
            "Цивилизация Ориона прошла долгую историю внутренних конфликтов между светлыми и темными ветвями и выработала глубокое понимание природы дуальности.",
            "https://images.unsplash.com/photo-1543722530-d2c3201371e7?auto=format&fit=crop&w=1174&q=80",
            &["Воля", "Стратегия", "Дуальность"],
            "Легенды о войнах Ориона отражены в земных мифах о борьбе света и тьмы; завершение этих войн стало уроком равновесия для всей галактики.",
        ),
        civilization(
            "sirians", "Сирианцы", "sirius",
            "Хранители знаний о воде, звуке и сакральной геометрии.",
            "Сирианцы — цивилизация системы Сириуса, связанная с древним Египтом и дельфинами Земли. Передают знания о звуковых вибрациях и геометрии пространства.",
            "https://images.unsplash.com/photo-1419242902214-272b3f66ee7a?auto=format&fit=crop&w=1213&q=80",
            &["Знание", "Звук", "Геометрия"],
            "Жрецы древнего Египта связывали разливы Нила с восходом Сириуса и считали его дом источником сокровенных знаний.",
        ),
        civilization(
            "arcturians", "Арктурианцы", "arcturus",
            "Мастера энергетического исцеления и тонких технологий.",
            "Арктурианцы — одна из самых технологически и духовно развитых цивилизаций, специализирующаяся на исцелении энергетических структур и сопровождении переходов сознания.",
            "https://images.unsplash.com/photo-1614728263952-84ea256f9679?auto=format&fit=crop&w=1074&q=80",
            &["Исцеление", "Технологии", "Сострадание"],
            "Считается, что корабли арктурианцев сопровождают Землю в периоды планетарных перемен, поддерживая ее энергетическое поле.",
        ),
        civilization(
            "andromedans", "Андромедианцы", "andromeda",
            "Свободолюбивые путешественники из соседней галактики.",
            "Андромедианцы — цивилизация галактики Андромеды, ценящая свободу и исследование. Помогают молодым цивилизациям избегать ловушек контроля и зависимости.",
            "https://images.unsplash.com/photo-1506703719100-a0b3a3c7be4d?auto=format&fit=crop&w=1170&q=80",
            &["Свобода", "Исследование", "Независимость"],
            "Посланники Андромеды, по преданиям, появляются там, где цивилизация стоит перед выбором между свободой и контролем.",
        ),
        civilization(
            "vegans", "Веганцы", "vega",
            "Философы и музыканты звездных сфер.",
            "Цивилизация Веги — ветвь лирианской расы, развившая искусство гармонии звука и мысли. Их музыка считается языком, понятным любому сознанию.",
            "https://images.unsplash.com/photo-1465101162946-4377e57745c3?auto=format&fit=crop&w=1178&q=80",
            &["Гармония", "Музыка", "Философия"],
            "Веганские мелодии, по легендам, легли в основу древнейших земных звукорядов и храмовых песнопений.",
        ),
        civilization(
            "centaurians", "Центавриане", "centauri",
            "Ближайшие соседи Земли, терпеливые наблюдатели.",
            "Цивилизация Альфы Центавра наблюдает за Землей дольше всех звездных народов. Славится терпением, точностью и бережным отношением к свободе воли.",
            "https://images.unsplash.com/photo-1475066392170-59d55d96fe51?auto=format&fit=crop&w=1074&q=80",
            &["Терпение", "Наблюдение", "Точность"],
            "Близость к Солнечной системе сделала центавриан первыми свидетелями зарождения земной жизни.",
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn constellation(
    id: &str,
    name: &str,
    latin_name: &str,
    image: &str,
    description: &str,
    civilizations: &[&str],
    stars: &[&str],
    ra: &str,
    dec: &str,
) -> Constellation {
    Constellation {
        id: id.to_string(),
        name: name.to_string(),
        latin_name: latin_name.to_string(),
        image: image.to_string(),
        description: description.to_string(),
        civilizations: civilizations.iter().map(|c| c.to_string()).collect(),
        stars: stars.iter().map(|s| s.to_string()).collect(),
        coordinates: SkyCoordinates {
            ra: ra.to_string(),
            dec: dec.to_string(),
        },
    }
}

pub fn constellations() -> Vec<Constellation> {
    vec![
        constellation(
            "pleiades", "Плеяды", "Pleiades (M45)",
            "https://images.unsplash.com/photo-1534447677768-be436bb09401?auto=format&fit=crop&w=1170&q=80",
            "Плеяды — рассеянное звёздное скопление в созвездии Тельца. Одно из ближайших к Земле и наиболее заметных для невооружённого глаза звёздных скоплений.",
            &["pleiadians"],
            &["Альциона", "Электра", "Майя", "Меропа", "Тайгета", "Целено", "Астеропа"],
            "03h 47m", "+24° 07′",
        ),
        constellation(
            "lyra", "Лира", "Lyra",
            "https://images.unsplash.com/photo-1462331940025-496dfbfc7564?auto=format&fit=crop&w=1211&q=80",
            "Лира — небольшое созвездие северного полушария неба. Содержит одну из ярчайших звёзд неба — Вегу, и знаменитую планетарную туманность «Кольцо» (M57).",
            &["lyrans"],
            &["Вега", "Шелиак", "Сулафат", "Альхена"],
            "18h 30m", "+40° 00′",
        ),
        constellation(
            "orion", "Орион", "Orion",
            "https://images.unsplash.com/photo-1543722530-d2c3201371e7?auto=format&fit=crop&w=1174&q=80",
            "Орион — одно из наиболее заметных и узнаваемых созвездий на ночном небе. Содержит яркие звёзды Бетельгейзе и Ригель, а также знаменитую туманность Ориона.",
            &["orions"],
            &["Бетельгейзе", "Ригель", "Беллатрикс", "Саиф", "Альнитак", "Альнилам", "Минтака"],
            "05h 30m", "+00° 00′",
        ),
        constellation(
            "sirius", "Сириус", "Sirius (Alpha Canis Majoris)",
            "https://images.unsplash.com/photo-1419242902214-272b3f66ee7a?auto=format&fit=crop&w=1213&q=80",
            "Сириус — ярчайшая звезда ночного неба, расположенная в созвездии Большого Пса. Двойная звезда из Сириуса A и белого карлика Сириуса B.",
            &["sirians"],
            &["Сириус A", "Сириус B"],
            "06h 45m", "-16° 43′",
        ),
        constellation(
            "arcturus", "Арктур", "Arcturus (Alpha Boötis)",
            "https://images.unsplash.com/photo-1614728263952-84ea256f9679?auto=format&fit=crop&w=1074&q=80",
            "Арктур — ярчайшая звезда в созвездии Волопаса и четвёртая по яркости звезда ночного неба. Оранжевый гигант в 37 световых годах от Солнца.",
            &["arcturians"],
            &["Арктур"],
            "14h 15m", "+19° 11′",
        ),
        constellation(
            "andromeda", "Андромеда", "Andromeda",
            "https://images.unsplash.com/photo-1506703719100-a0b3a3c7be4d?auto=format&fit=crop&w=1170&q=80",
            "Андромеда — созвездие северного полушария неба. В нем находится ближайшая к нам крупная галактика — Галактика Андромеды (M31).",
            &["andromedans"],
            &["Альферац", "Мирах", "Аламак", "Адхил"],
            "01h 00m", "+40° 00′",
        ),
        constellation(
            "vega", "Вега", "Vega (Alpha Lyrae)",
            "https://images.unsplash.com/photo-1465101162946-4377e57745c3?auto=format&fit=crop&w=1178&q=80",
            "Вега — ярчайшая звезда в созвездии Лиры и пятая по яркости звезда ночного неба. Бело-голубая звезда главной последовательности в 25 световых годах от Солнца.",
            &["vegans"],
            &["Вега"],
            "18h 36m", "+38° 47′",
        ),
        constellation(
            "centauri", "Альфа Центавра", "Alpha Centauri",
            "https://images.unsplash.com/photo-1475066392170-59d55d96fe51?auto=format&fit=crop&w=1074&q=80",
            "Альфа Центавра — ближайшая к Солнечной системе звёздная система: две похожие на Солнце звезды и красный карлик Проксима Центавра.",
            &["centaurians"],
            &["Альфа Центавра A", "Альфа Центавра B", "Проксима Центавра"],
            "14h 39m", "-60° 50′",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_cross_references_are_consistent() {
        let courses = courses();
        let meditations = meditations();
        let instructor_ids: Vec<String> = instructors().into_iter().map(|i| i.id).collect();

        for course in &courses {
            assert!(
                instructor_ids.contains(&course.instructor_id),
                "course {} references unknown instructor",
                course.id
            );
        }
        for meditation in &meditations {
            assert!(instructor_ids.contains(&meditation.instructor_id));
        }

        // Instructor back-references point at seeded content.
        let course_ids: Vec<&str> = courses.iter().map(|c| c.id.as_str()).collect();
        let meditation_ids: Vec<&str> = meditations.iter().map(|m| m.id.as_str()).collect();
        for instructor in instructors() {
            for id in &instructor.courses {
                assert!(course_ids.contains(&id.as_str()));
            }
            for id in &instructor.meditations {
                assert!(meditation_ids.contains(&id.as_str()));
            }
        }
    }

    #[test]
    fn course_categories_resolve_to_seeded_names() {
        let names: Vec<String> = categories().into_iter().map(|c| c.name).collect();
        for course in courses() {
            assert!(names.contains(&course.category), "{}", course.category);
        }
        for meditation in meditations() {
            assert!(names.contains(&meditation.category));
        }
    }

    #[test]
    fn every_civilization_belongs_to_a_constellation() {
        let constellations = constellations();
        for civilization in civilizations() {
            let home = constellations
                .iter()
                .find(|c| c.id == civilization.constellation_id)
                .expect("unknown constellation");
            assert!(home.civilizations.contains(&civilization.id));
        }
    }

    #[test]
    fn lesson_orders_are_contiguous() {
        for course in courses() {
            let orders: Vec<u32> = course.lessons.iter().map(|l| l.order).collect();
            let expected: Vec<u32> = (1..=course.lessons.len() as u32).collect();
            assert_eq!(orders, expected, "course {}", course.id);
        }
    }

    #[test]
    fn cards_carry_their_deck_discriminator() {
        assert!(cosmic_cards().iter().all(|c| c.deck == Deck::Cosmic));
        assert!(archangel_cards().iter().all(|c| c.deck == Deck::Archangels));
        assert!(amu_mom_cards().iter().all(|c| c.deck == Deck::AmuMom));
    }

    #[test]
    fn deck_metadata_covers_all_three_decks() {
        let decks = card_decks();
        assert_eq!(decks.len(), 3);
        assert!(decks.iter().any(|d| d.deck_type == Deck::Cosmic));
        assert!(decks.iter().any(|d| d.deck_type == Deck::Archangels));
        assert!(decks.iter().any(|d| d.deck_type == Deck::AmuMom));
        // Deck ids double as routing keys in the reading screen.
        for deck in &decks {
            assert!(!deck.id.is_empty());
            assert!(deck.card_count > 0);
        }
    }
}
