//! Word pools.

pub const LOREM: &[&str] = &[
    "beautiful", "better", "ugly", "explicit", "implicit", "simple", "complex",
    "complicated", "flat", "nested", "sparse", "dense", "readability", "counts",
    "special", "cases", "enough", "break", "rules", "although", "practicality",
    "beats", "purity", "errors", "should", "never", "pass", "silently", "unless",
    "explicitly", "silenced", "face", "ambiguity", "refuse", "temptation",
    "guess", "there", "one", "preferably", "only", "obvious", "way", "now",
    "often", "right", "implementation", "hard", "explain", "bad", "idea",
    "easy", "good", "namespaces", "honking", "great", "let", "more", "those",
];

pub const FIRST_NAMES: &[&str] = &[
    "Ada", "Alan", "Anita", "Barbara", "Bjarne", "Brian", "Charles", "Dennis",
    "Donald", "Edsger", "Frances", "Grace", "Guido", "Hedy", "Ivan", "James",
    "Jean", "John", "Ken", "Larry", "Linus", "Margaret", "Niklaus", "Radia",
    "Richard", "Rob", "Shafi", "Sophie", "Tim", "Yukihiro",
];

pub const LAST_NAMES: &[&str] = &[
    "Allen", "Babbage", "Backus", "Berners-Lee", "Borg", "Cerf", "Dijkstra",
    "Engelbart", "Goldwasser", "Hamilton", "Hopper", "Kay", "Kernighan",
    "Knuth", "Lamarr", "Liskov", "Lovelace", "Matsumoto", "McCarthy", "Perlman",
    "Pike", "Ritchie", "Rossum", "Stallman", "Stroustrup", "Sutherland",
    "Thompson", "Torvalds", "Turing", "Wall", "Wilson", "Wirth",
];

pub const COMPANY_SUFFIXES: &[&str] = &["Inc.", "LLC", "Ltd.", "Group", "Labs", "Systems"];

pub const FREE_EMAIL_DOMAINS: &[&str] = &[
    "gmail.com", "hotmail.com", "yahoo.com", "outlook.com", "proton.me",
];

pub const TLDS: &[&str] = &["com", "org", "net", "io", "nl", "am", "dev"];

pub const CITIES: &[&str] = &[
    "Amsterdam", "Yerevan", "Athens", "Berlin", "Lisbon", "Tokyo", "Toronto",
    "Nairobi", "Lima", "Oslo", "Seoul", "Dublin", "Helsinki", "Vienna",
];

pub const COUNTRIES: &[(&str, &str)] = &[
    ("Armenia", "AM"), ("Austria", "AT"), ("Canada", "CA"), ("Finland", "FI"),
    ("Germany", "DE"), ("Greece", "GR"), ("Ireland", "IE"), ("Japan", "JP"),
    ("Kenya", "KE"), ("Netherlands", "NL"), ("Norway", "NO"), ("Peru", "PE"),
    ("Portugal", "PT"), ("South Korea", "KR"),
];

pub const IMAGE_SERVICES: &[&str] = &[
    "https://picsum.photos/{width}/{height}",
    "https://dummyimage.com/{width}x{height}",
    "https://placekitten.com/{width}/{height}",
];
