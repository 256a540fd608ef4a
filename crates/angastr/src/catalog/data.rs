use serde::Serialize;

/// Company contact card shown in the site header and footer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompanyInfo {
    pub name: &'static str,
    pub tagline: &'static str,
    pub description: &'static str,
    pub address: &'static str,
    pub working_hours: &'static str,
    pub phone: &'static str,
    pub fax: &'static str,
    pub email: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Service {
    pub id: u32,
    pub category: &'static str,
    pub items: &'static [&'static str],
}

/// Showcase entry for the projects section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Project {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub area: &'static str,
    pub duration: &'static str,
    #[serde(rename = "type")]
    pub kind: &'static str,
}

pub(super) const COMPANY: CompanyInfo = CompanyInfo {
    name: "ООО «Ангастр»",
    tagline: "Строительство каркасных ангаров под ключ",
    description: "Профессиональное строительство каркасных ангаров от изготовления \
                  металлоконструкций и заливки фундамента до возведения холодных ангаров \
                  или теплых ангаров, как арочного так и прямостенного типа",
    address: "352240 г. Краснодар, ул. Восточно-кругликовская, 60",
    working_hours: "Пн-Пт: 8:00 - 18:00",
    phone: "+7 (918) 633-32-21",
    fax: "8(861) 953-40-77",
    email: "angastr@inbox.ru",
};

pub(super) const SERVICES: &[Service] = &[
    Service {
        id: 1,
        category: "Промышленные объекты",
        items: &[
            "Промышленные здания",
            "Складские здания",
            "Производственные цеха",
            "Ангары-склады для инвентаря",
        ],
    },
    Service {
        id: 2,
        category: "Коммерческие объекты",
        items: &[
            "Торговые павильоны",
            "Торговые комплексы",
            "Выставочные ангары",
            "Многоцелевые модульные здания",
        ],
    },
    Service {
        id: 3,
        category: "Спортивные сооружения",
        items: &[
            "Ангары для спорта",
            "Спортивные ангары",
            "Развлекательные комплексы",
        ],
    },
    Service {
        id: 4,
        category: "Сельскохозяйственные объекты",
        items: &[
            "Сельскохозяйственные здания",
            "Теплицы",
            "Открытые навесы",
        ],
    },
    Service {
        id: 5,
        category: "Специализированные ангары",
        items: &[
            "Ангары для авиации",
            "Ангары для хранения яхт",
            "Строительство гаражей",
            "Мобильные здания",
        ],
    },
];

pub(super) const PROJECTS: &[Project] = &[
    Project {
        id: 1,
        title: "Складской комплекс 2400 м²",
        description: "Строительство современного складского комплекса для логистической компании",
        area: "2400 м²",
        duration: "45 дней",
        kind: "Складское здание",
    },
    Project {
        id: 2,
        title: "Производственный цех 1800 м²",
        description: "Возведение производственного цеха для машиностроительного предприятия",
        area: "1800 м²",
        duration: "38 дней",
        kind: "Производственное здание",
    },
    Project {
        id: 3,
        title: "Спортивный комплекс 3200 м²",
        description: "Строительство многофункционального спортивного комплекса",
        area: "3200 м²",
        duration: "52 дня",
        kind: "Спортивное сооружение",
    },
];
