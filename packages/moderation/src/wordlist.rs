//! Denylist and allowlist word tables.
//!
//! Entries are written in their plain spelling; the dictionary builder
//! normalizes them with the same pipeline used on user text, so the
//! tables stay readable. Multi-word entries are matched as phrases.

/// Base English denylist.
pub const BASE_ENGLISH: &[&str] = &[
    "anal",
    "anus",
    "arse",
    "arsehole",
    "ass",
    "asses",
    "asshole",
    "assholes",
    "bastard",
    "bastards",
    "bitch",
    "bitches",
    "bitchy",
    "blowjob",
    "bollocks",
    "boner",
    "boob",
    "boobs",
    "bullshit",
    "clit",
    "cock",
    "cocks",
    "cocksucker",
    "crap",
    "cum",
    "cunt",
    "cunts",
    "dick",
    "dickhead",
    "dicks",
    "dildo",
    "dumbass",
    "fag",
    "faggot",
    "fags",
    "fuck",
    "fucked",
    "fucker",
    "fuckers",
    "fucking",
    "fucks",
    "goddamn",
    "handjob",
    "horseshit",
    "jackass",
    "jerk",
    "jizz",
    "motherfucker",
    "motherfucking",
    "nigga",
    "niggas",
    "nigger",
    "niggers",
    "penis",
    "piss",
    "pissed",
    "prick",
    "pricks",
    "pussies",
    "pussy",
    "retard",
    "retarded",
    "shit",
    "shits",
    "shitty",
    "slut",
    "sluts",
    "tit",
    "tits",
    "twat",
    "vagina",
    "wank",
    "wanker",
    "whore",
    "whores",
];

/// Supplementary Filipino denylist, words and phrases.
pub const FILIPINO: &[&str] = &[
    "anak ng puta",
    "bilat",
    "bobo",
    "boba",
    "buwisit",
    "burat",
    "demonyo ka",
    "engot",
    "gaga",
    "gago",
    "hayop ka",
    "hinayupak",
    "hudas",
    "inutil",
    "kantot",
    "kantutan",
    "kingina",
    "kupal",
    "leche",
    "lintik",
    "pakshet",
    "pakyu",
    "peste",
    "pokpok",
    "pukis",
    "punyeta",
    "puta",
    "putang ina",
    "putangina",
    "putragis",
    "tanga",
    "tangina",
    "tarantado",
    "tarantada",
    "titi",
    "ulol",
    "ungas",
];

/// Explicitly permitted entries, removed from the merged denylist
/// after both lists are loaded. Removal of an absent entry is a no-op.
pub const ALLOWLIST: &[&str] = &[
    // English safe words
    "class",
    "classic",
    "pass",
    "assembly",
    "bass",
    "scunthorpe",
    "assess",
    "passage",
    "grass",
    "assistant",
    // Filipino safe words
    "tanggap",
    "tanggapan",
    "magagandang",
    "pukis",
    "bago",
    "hayop na cute",
];
