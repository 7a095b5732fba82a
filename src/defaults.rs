//! Built-in lookup tables used when a configuration file does not supply its own.

/// Ordered (category, keywords) pairs. Earlier categories win on ambiguous text.
pub const OCCUPATION_KEYWORDS: &[(&str, &[&str])] = &[
    (
        "Military/Intelligence",
        &[
            "officer", "gru", "intelligence", "military", "fsb", "security service",
            "syrian air force", "army", "navy", "marine", "directorate", "general staff",
        ],
    ),
    (
        "Medical",
        &[
            "doctor", "surgeon", "physician", "nurse", "nursing", "therapist",
            "cardiologist", "medical", "catheter", "respiratory", "chiropractor",
            "acupuncturist", "chemist", "pharmaceutical",
        ],
    ),
    (
        "IT/Technology",
        &[
            "it worker", "software", "programmer", "developer", "engineer", "computer",
            "network", "blockchain", "backend", "zksnark", "technology", "web",
        ],
    ),
    (
        "Construction",
        &[
            "construction", "carpenter", "welder", "electrician", "plumber", "mason",
            "painter", "handyman", "builder", "contractor", "tractor driver",
            "floor sander",
        ],
    ),
    (
        "Transportation",
        &[
            "driver", "truck", "taxi", "cab", "mechanic", "aviation", "pilot", "shipping",
            "boat", "ship",
        ],
    ),
    (
        "Food Service",
        &[
            "cook", "chef", "waiter", "restaurant", "food service", "kitchen",
        ],
    ),
    (
        "Business/Management",
        &[
            "ceo", "president", "director", "manager", "executive", "businessman",
            "entrepreneur", "owner", "operator", "consultant",
        ],
    ),
    (
        "Finance/Trading",
        &[
            "broker", "trader", "commodities", "investment", "banking", "finance",
            "advisor", "asset manager",
        ],
    ),
    (
        "Government",
        &[
            "government", "official", "diplomat", "service officer", "taxation",
            "commission", "delegation",
        ],
    ),
    (
        "Law Enforcement",
        &[
            "police", "constable", "dispatcher", "security", "law enforcement",
        ],
    ),
    (
        "Agriculture",
        &[
            "farm", "agriculture", "laborer", "migrant", "seed", "rice", "landscaping",
        ],
    ),
    (
        "Sales/Retail",
        &[
            "sales", "salesman", "retail", "store", "clerk", "dealer",
        ],
    ),
    (
        "Trade/Manufacturing",
        &[
            "warehouse", "factory", "manufacturing", "production", "textile",
            "procurement", "arms broker",
        ],
    ),
    (
        "Religious",
        &[
            "priest", "pastor", "religious", "clergy", "minister",
        ],
    ),
    (
        "Services",
        &[
            "massage", "nail technician", "barber", "salon", "spa",
        ],
    ),
    (
        "Education/Research",
        &[
            "teacher", "professor", "researcher", "education", "academic",
        ],
    ),
    (
        "Emergency Services",
        &[
            "fireman", "firefighter", "paramedic", "emt", "rescue",
        ],
    ),
    (
        "Entertainment",
        &[
            "recording studio", "amusement", "arcade", "game",
        ],
    ),
    (
        "Unknown",
        &[
            "unknown", "unemployed", "none", "n/a",
        ],
    ),
];

/// Place of birth as printed on source pages -> (country, ISO alpha-3).
/// `None` marks places known to carry no country.
pub const BIRTH_PLACES: &[(&str, Option<(&str, &str)>)] = &[
    ("Los Angeles, California", Some(("United States", "USA"))),
    ("Pasadena, California", Some(("United States", "USA"))),
    ("Arcadia, California", Some(("United States", "USA"))),
    ("Sacramento, California", Some(("United States", "USA"))),
    ("San Francisco, California", Some(("United States", "USA"))),
    ("Fresno, California", Some(("United States", "USA"))),
    ("California", Some(("United States", "USA"))),
    ("Brooklyn, New York", Some(("United States", "USA"))),
    ("New York City, New York", Some(("United States", "USA"))),
    ("New York", Some(("United States", "USA"))),
    ("El Paso, Texas", Some(("United States", "USA"))),
    ("Memphis, Tennessee", Some(("United States", "USA"))),
    ("Mobile, Alabama", Some(("United States", "USA"))),
    ("Selma, Alabama", Some(("United States", "USA"))),
    ("Alabama", Some(("United States", "USA"))),
    ("Springfield, Illinois", Some(("United States", "USA"))),
    ("Olney, Illinois", Some(("United States", "USA"))),
    ("Illinois", Some(("United States", "USA"))),
    ("Detroit, Michigan", Some(("United States", "USA"))),
    ("Michigan, USA", Some(("United States", "USA"))),
    ("Miami, Florida", Some(("United States", "USA"))),
    ("Florida", Some(("United States", "USA"))),
    ("New Jersey", Some(("United States", "USA"))),
    ("Virginia", Some(("United States", "USA"))),
    ("Oregon", Some(("United States", "USA"))),
    ("Pennsylvania", Some(("United States", "USA"))),
    ("North Dakota", Some(("United States", "USA"))),
    ("Louisiana", Some(("United States", "USA"))),
    ("Massachusetts", Some(("United States", "USA"))),
    ("Hawaii", Some(("United States", "USA"))),
    ("Idaho", Some(("United States", "USA"))),
    ("Ohio", Some(("United States", "USA"))),
    ("Wadesboro, North Carolina", Some(("United States", "USA"))),
    ("Washington, DC", Some(("United States", "USA"))),
    ("Wayne, Pennsylvania", Some(("United States", "USA"))),
    ("Hunan Province, China", Some(("China", "CHN"))),
    ("Liaoning, China", Some(("China", "CHN"))),
    ("Hangzhou, Zhejiang Province, China", Some(("China", "CHN"))),
    ("Heilongjiang, China", Some(("China", "CHN"))),
    ("Wusu, Xinjiang, China", Some(("China", "CHN"))),
    ("Anhui, China", Some(("China", "CHN"))),
    ("Tacheng, Xinjiang, China or Urumqi, Xinjiang, China", Some(("China", "CHN"))),
    ("Shaanxi, China", Some(("China", "CHN"))),
    ("Shandong, China", Some(("China", "CHN"))),
    ("Shanghai, China", Some(("China", "CHN"))),
    ("Weifang, Shandong, China", Some(("China", "CHN"))),
    ("Zhejiang, China", Some(("China", "CHN"))),
    ("China", Some(("China", "CHN"))),
    ("People's Republic of China", Some(("China", "CHN"))),
    ("Chelyabinskaya Oblast, Russia", Some(("Russia", "RUS"))),
    ("Tver, Russia", Some(("Russia", "RUS"))),
    ("Stavropol, Russia", Some(("Russia", "RUS"))),
    ("Novocherkask, Russia", Some(("Russia", "RUS"))),
    ("Volzhskiy, Volgogradskaya Oblast, Russia", Some(("Russia", "RUS"))),
    ("Saint Petersburg, Russia", Some(("Russia", "RUS"))),
    ("Murmanskaya Oblast, Russia", Some(("Russia", "RUS"))),
    ("Sosnovka, Russia", Some(("Russia", "RUS"))),
    ("Moscow, Russia", Some(("Russia", "RUS"))),
    ("Village of Fenino, Serpukhovskoy District, Moscow Oblast, Russia", Some(("Russia", "RUS"))),
    ("Totma, Vologda Oblast, Russia", Some(("Russia", "RUS"))),
    ("Tymovskoye, Russia", Some(("Russia", "RUS"))),
    ("Leningrad, Russia", Some(("Russia", "RUS"))),
    ("Kaluga, Russia", Some(("Russia", "RUS"))),
    ("City of Syktyvkar, Russia", Some(("Russia", "RUS"))),
    ("Ramenskoye, Russia", Some(("Russia", "RUS"))),
    ("Grozny, Chechnya, Russia", Some(("Russia", "RUS"))),
    ("Rostov-On-Don, Russia", Some(("Russia", "RUS"))),
    ("Khaborovsk, Russia", Some(("Russia", "RUS"))),
    ("Obninsk, Kaluga Oblast, Russia", Some(("Russia", "RUS"))),
    ("Vologda, Russia", Some(("Russia", "RUS"))),
    ("Bratsk, Irkutsk Oblast, Russia", Some(("Russia", "RUS"))),
    ("Kursk, Russia", Some(("Russia", "RUS"))),
    ("Yoshkar-Ola, Russia", Some(("Russia", "RUS"))),
    ("Stavropolskiy Kraya, Russia", Some(("Russia", "RUS"))),
    ("Bologoe-4, Kalininskiy Oblast, Russia", Some(("Russia", "RUS"))),
    ("Russia", Some(("Russia", "RUS"))),
    ("Russian Federation", Some(("Russia", "RUS"))),
    ("Zabol, Iran", Some(("Iran", "IRN"))),
    ("Tehran, Iran", Some(("Iran", "IRN"))),
    ("Tabriz, Iran", Some(("Iran", "IRN"))),
    ("Zanjan, Iran", Some(("Iran", "IRN"))),
    ("Urmia, Iran", Some(("Iran", "IRN"))),
    ("Yazd Province, Iran", Some(("Iran", "IRN"))),
    ("Sabzevar, Iran", Some(("Iran", "IRN"))),
    ("Tehran Province, Iran", Some(("Iran", "IRN"))),
    ("Karaj, Iran", Some(("Iran", "IRN"))),
    ("Mianeh, Iran", Some(("Iran", "IRN"))),
    ("Naghadeh, Iran", Some(("Iran", "IRN"))),
    ("Ilam, Iran", Some(("Iran", "IRN"))),
    ("Mashhad, Iran", Some(("Iran", "IRN"))),
    ("Ardabil, Iran", Some(("Iran", "IRN"))),
    ("Iran", Some(("Iran", "IRN"))),
    ("Nayarit, Mexico", Some(("Mexico", "MEX"))),
    ("Sinaloa, Mexico", Some(("Mexico", "MEX"))),
    ("Baja California, Mexico", Some(("Mexico", "MEX"))),
    ("Jalisco, Mexico", Some(("Mexico", "MEX"))),
    ("Veracruz, Mexico", Some(("Mexico", "MEX"))),
    ("Jerez, Zacatecas, Mexico", Some(("Mexico", "MEX"))),
    ("Chuicopa, Sinaloa, Mexico", Some(("Mexico", "MEX"))),
    ("Mezquital del Oro, Zacatecas, Mexico", Some(("Mexico", "MEX"))),
    ("Zacatecas, Mexico", Some(("Mexico", "MEX"))),
    ("Colima, Mexico", Some(("Mexico", "MEX"))),
    ("Mexico City, Mexico", Some(("Mexico", "MEX"))),
    ("Hidalgo, Mexico", Some(("Mexico", "MEX"))),
    ("Durango, Mexico", Some(("Mexico", "MEX"))),
    ("Mexico", Some(("Mexico", "MEX"))),
    ("Jucuaran, Usulutan, El Salvador", Some(("El Salvador", "SLV"))),
    ("San Francisco Menendez, Ahuachapan, El Salvador", Some(("El Salvador", "SLV"))),
    ("San Salvador, San Salvador, El Salvador", Some(("El Salvador", "SLV"))),
    ("Ozatlan, Usulutan, El Salvador", Some(("El Salvador", "SLV"))),
    ("Ahuachapan, Ahuachapan, El Salvador", Some(("El Salvador", "SLV"))),
    ("Tejutla, Chalatenango, El Salvador", Some(("El Salvador", "SLV"))),
    ("Cuscatancingo, San Salvador, El Salvador", Some(("El Salvador", "SLV"))),
    ("Usulutan, Usulutan, El Salvador", Some(("El Salvador", "SLV"))),
    ("El Salvador", Some(("El Salvador", "SLV"))),
    ("Pyongyang, North Korea", Some(("North Korea", "PRK"))),
    ("Democratic People's Republic of Korea (North Korea)", Some(("North Korea", "PRK"))),
    ("Kryvyi Rih, Dnipropetrovsk Oblast, Ukraine", Some(("Ukraine", "UKR"))),
    ("Kyiv, Ukraine", Some(("Ukraine", "UKR"))),
    ("Kiev, Ukraine", Some(("Ukraine", "UKR"))),
    ("Boryspil, Kyiv Oblast, Ukraine", Some(("Ukraine", "UKR"))),
    ("Ukraine", Some(("Ukraine", "UKR"))),
    ("Homs, Syria", Some(("Syria", "SYR"))),
    ("Damascus, Syria", Some(("Syria", "SYR"))),
    ("Allepo, Syria", Some(("Syria", "SYR"))),
    ("Syria", Some(("Syria", "SYR"))),
    ("San Juan, Puerto Rico", Some(("Puerto Rico", "PRI"))),
    ("Lajas, Puerto Rico", Some(("Puerto Rico", "PRI"))),
    ("Aguada, Puerto Rico", Some(("Puerto Rico", "PRI"))),
    ("Pakistan", Some(("Pakistan", "PAK"))),
    ("Pranpura, Haryana, India", Some(("India", "IND"))),
    ("Hyderabad, Pakistan", Some(("Pakistan", "PAK"))),
    ("Karachi, Pakistan", Some(("Pakistan", "PAK"))),
    ("India", Some(("India", "IND"))),
    ("Honduras", Some(("Honduras", "HND"))),
    ("Atlantida, Honduras", Some(("Honduras", "HND"))),
    ("Copan, Honduras", Some(("Honduras", "HND"))),
    ("Cambodia", Some(("Cambodia", "KHM"))),
    ("Uzbekistan", Some(("Uzbekistan", "UZB"))),
    ("Toy Teipa, Uzbekistan", Some(("Uzbekistan", "UZB"))),
    ("Haiti", Some(("Haiti", "HTI"))),
    ("Nigeria", Some(("Nigeria", "NGA"))),
    ("Minsk, Belarus", Some(("Belarus", "BLR"))),
    ("Jamaica", Some(("Jamaica", "JAM"))),
    ("Santiago, Dominican Republic", Some(("Dominican Republic", "DOM"))),
    ("Dominican Republic", Some(("Dominican Republic", "DOM"))),
    ("La Calera, Chile", Some(("Chile", "CHL"))),
    ("LaGuaira, Venezuela", Some(("Venezuela", "VEN"))),
    ("Venezuela", Some(("Venezuela", "VEN"))),
    ("Bangladesh", Some(("Bangladesh", "BGD"))),
    ("Riga, Latvia", Some(("Latvia", "LVA"))),
    ("Vietnam", Some(("Vietnam", "VNM"))),
    ("Republic of Vietnam", Some(("Vietnam", "VNM"))),
    ("Mong Cai, Quang Ninh Province, North Vietnam", Some(("Vietnam", "VNM"))),
    ("Quang Binh Province, Vietnam", Some(("Vietnam", "VNM"))),
    ("Sweden", Some(("Sweden", "SWE"))),
    ("Canada", Some(("Canada", "CAN"))),
    ("Bel Ombre, Mahe Island, Seychelles", Some(("Seychelles", "SYC"))),
    ("Spain", Some(("Spain", "ESP"))),
    ("Cuba", Some(("Cuba", "CUB"))),
    ("Turkey", Some(("Turkey", "TUR"))),
    ("Armenia", Some(("Armenia", "ARM"))),
    ("Ghana", Some(("Ghana", "GHA"))),
    ("Ecuador", Some(("Ecuador", "ECU"))),
    ("Guayaquil, Ecuador", Some(("Ecuador", "ECU"))),
    ("Brazil", Some(("Brazil", "BRA"))),
    ("Laos", Some(("Laos", "LAO"))),
    ("Philippines", Some(("Philippines", "PHL"))),
    ("Ilocos Norte, Philippines", Some(("Philippines", "PHL"))),
    ("Germany", Some(("Germany", "DEU"))),
    ("Sydney, Australia", Some(("Australia", "AUS"))),
    ("Sumqayit, Azerbaijan", Some(("Azerbaijan", "AZE"))),
    ("Muscat, Oman", Some(("Oman", "OMN"))),
    ("United Kingdom", Some(("United Kingdom", "GBR"))),
    ("Batroun, Lebanon", Some(("Lebanon", "LBN"))),
    ("Guatemala", Some(("Guatemala", "GTM"))),
    ("Unknown", None),
];
