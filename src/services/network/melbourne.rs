//! Embedded Melbourne suburb network
//!
//! Travel minutes between suburbs at free-flow, the coarse zones used for
//! scheduling and the zone-to-zone fallback matrix.

type Row = (&'static str, &'static [(&'static str, u32)]);

pub(super) const SUBURB_MINUTES: &[Row] = &[
    // Central
    ("Melbourne", &[
        ("Carlton", 8), ("Richmond", 12), ("Fitzroy", 10), ("South Yarra", 15), ("St Kilda", 18),
        ("Brighton", 25), ("Toorak", 18), ("Hawthorn", 15), ("Camberwell", 20), ("Brunswick", 12),
        ("Collingwood", 10), ("Prahran", 16), ("Windsor", 14), ("Southbank", 5), ("Docklands", 8),
    ]),
    // Inner north
    ("Carlton", &[
        ("Melbourne", 8), ("Fitzroy", 8), ("Collingwood", 10), ("Brunswick", 12), ("Richmond", 15),
        ("Hawthorn", 20), ("Camberwell", 22), ("South Yarra", 18), ("Toorak", 22), ("Brighton", 30),
        ("St Kilda", 25), ("Prahran", 20), ("Windsor", 18), ("Parkville", 5), ("North Melbourne", 10),
    ]),
    ("Fitzroy", &[
        ("Melbourne", 10), ("Carlton", 8), ("Collingwood", 5), ("Richmond", 8), ("Brunswick", 15),
        ("Hawthorn", 18), ("Camberwell", 20), ("South Yarra", 20), ("Toorak", 25), ("Brighton", 35),
        ("St Kilda", 30), ("Prahran", 25), ("Windsor", 22), ("Abbotsford", 8), ("Northcote", 10),
    ]),
    ("Brunswick", &[
        ("Melbourne", 12), ("Carlton", 12), ("Fitzroy", 15), ("Collingwood", 18), ("Richmond", 25),
        ("Hawthorn", 30), ("Camberwell", 35), ("South Yarra", 30), ("Toorak", 35), ("Brighton", 45),
        ("St Kilda", 40), ("Prahran", 35), ("Windsor", 32), ("Northcote", 8), ("Coburg", 12),
    ]),
    ("Collingwood", &[
        ("Melbourne", 10), ("Carlton", 10), ("Fitzroy", 5), ("Richmond", 10), ("Brunswick", 18),
        ("Hawthorn", 20), ("Camberwell", 22), ("South Yarra", 18), ("Toorak", 22), ("Brighton", 32),
        ("St Kilda", 28), ("Prahran", 22), ("Windsor", 20), ("Abbotsford", 5), ("Northcote", 12),
    ]),
    // Inner east
    ("Richmond", &[
        ("Melbourne", 12), ("Carlton", 15), ("Fitzroy", 8), ("Collingwood", 10), ("Brunswick", 25),
        ("Hawthorn", 15), ("Camberwell", 18), ("South Yarra", 12), ("Toorak", 18), ("Brighton", 25),
        ("St Kilda", 20), ("Prahran", 15), ("Windsor", 12), ("Abbotsford", 8), ("Burnley", 5),
    ]),
    ("Hawthorn", &[
        ("Melbourne", 15), ("Carlton", 20), ("Fitzroy", 18), ("Collingwood", 20), ("Richmond", 15),
        ("Camberwell", 12), ("South Yarra", 15), ("Toorak", 12), ("Brighton", 25), ("St Kilda", 22),
        ("Prahran", 18), ("Windsor", 15), ("Burnley", 10), ("Kew", 10), ("Auburn", 8),
    ]),
    ("Camberwell", &[
        ("Melbourne", 20), ("Carlton", 22), ("Fitzroy", 20), ("Collingwood", 22), ("Richmond", 18),
        ("Hawthorn", 12), ("South Yarra", 18), ("Toorak", 15), ("Brighton", 22), ("St Kilda", 25),
        ("Prahran", 20), ("Windsor", 18), ("Kew", 15), ("Auburn", 10), ("Glen Iris", 12),
    ]),
    // Inner south
    ("South Yarra", &[
        ("Melbourne", 15), ("Carlton", 18), ("Fitzroy", 20), ("Collingwood", 18), ("Richmond", 12),
        ("Hawthorn", 15), ("Camberwell", 18), ("Toorak", 8), ("Brighton", 20), ("St Kilda", 15),
        ("Prahran", 5), ("Windsor", 8), ("Southbank", 12), ("Albert Park", 12), ("Port Melbourne", 18),
    ]),
    ("Toorak", &[
        ("Melbourne", 18), ("Carlton", 22), ("Fitzroy", 25), ("Collingwood", 22), ("Richmond", 18),
        ("Hawthorn", 12), ("Camberwell", 15), ("South Yarra", 8), ("Brighton", 18), ("St Kilda", 20),
        ("Prahran", 10), ("Windsor", 12), ("Armadale", 8), ("Malvern", 10), ("Glen Iris", 15),
    ]),
    ("Prahran", &[
        ("Melbourne", 16), ("Carlton", 20), ("Fitzroy", 25), ("Collingwood", 22), ("Richmond", 15),
        ("Hawthorn", 18), ("Camberwell", 20), ("South Yarra", 5), ("Toorak", 10), ("Brighton", 20),
        ("St Kilda", 12), ("Windsor", 5), ("Albert Park", 10), ("Armadale", 12), ("Malvern", 15),
    ]),
    ("Windsor", &[
        ("Melbourne", 14), ("Carlton", 18), ("Fitzroy", 22), ("Collingwood", 20), ("Richmond", 12),
        ("Hawthorn", 15), ("Camberwell", 18), ("South Yarra", 8), ("Toorak", 12), ("Brighton", 18),
        ("St Kilda", 10), ("Prahran", 5), ("Albert Park", 8), ("Port Melbourne", 15), ("Balaclava", 12),
    ]),
    ("St Kilda", &[
        ("Melbourne", 18), ("Carlton", 25), ("Fitzroy", 30), ("Collingwood", 28), ("Richmond", 20),
        ("Hawthorn", 22), ("Camberwell", 25), ("South Yarra", 15), ("Toorak", 20), ("Brighton", 15),
        ("Prahran", 12), ("Windsor", 10), ("Albert Park", 8), ("Port Melbourne", 12), ("Elwood", 8),
    ]),
    ("Brighton", &[
        ("Melbourne", 25), ("Carlton", 30), ("Fitzroy", 35), ("Collingwood", 32), ("Richmond", 25),
        ("Hawthorn", 25), ("Camberwell", 22), ("South Yarra", 20), ("Toorak", 18), ("St Kilda", 15),
        ("Prahran", 20), ("Windsor", 18), ("Elsternwick", 8), ("Bentleigh", 12), ("Sandringham", 10),
    ]),
    // Outer sample
    ("Malvern", &[
        ("Melbourne", 22), ("Toorak", 10), ("Camberwell", 12), ("Hawthorn", 15), ("South Yarra", 15),
        ("Prahran", 15), ("Brighton", 20), ("Armadale", 5), ("Glen Iris", 8), ("Caulfield", 12),
    ]),
    ("Northcote", &[
        ("Melbourne", 15), ("Carlton", 18), ("Fitzroy", 10), ("Brunswick", 8), ("Collingwood", 12),
        ("Richmond", 20), ("Thornbury", 8), ("Preston", 12), ("Fairfield", 10), ("Alphington", 12),
    ]),
];

pub(super) const ZONES: &[(&str, &[&str])] = &[
    ("INNER_CITY", &["Melbourne", "Southbank", "Docklands", "Carlton", "Fitzroy", "Collingwood", "Richmond"]),
    ("INNER_NORTH", &["Brunswick", "Northcote", "Thornbury", "Preston", "Coburg", "Parkville"]),
    ("INNER_EAST", &["Hawthorn", "Camberwell", "Kew", "Auburn", "Burnley", "Abbotsford"]),
    ("INNER_SOUTH", &["South Yarra", "Toorak", "Prahran", "Windsor", "St Kilda", "Albert Park"]),
    ("BAYSIDE", &["Brighton", "Elwood", "Sandringham", "Bentleigh", "Elsternwick", "Balaclava"]),
    ("EASTERN", &["Malvern", "Armadale", "Glen Iris", "Caulfield", "Oakleigh", "Cheltenham"]),
];

pub(super) const ZONE_MINUTES: &[Row] = &[
    ("INNER_CITY", &[
        ("INNER_CITY", 12), ("INNER_NORTH", 15), ("INNER_EAST", 18), ("INNER_SOUTH", 16),
        ("BAYSIDE", 25), ("EASTERN", 22), ("OUTER", 35),
    ]),
    ("INNER_NORTH", &[
        ("INNER_CITY", 15), ("INNER_NORTH", 12), ("INNER_EAST", 25), ("INNER_SOUTH", 30),
        ("BAYSIDE", 40), ("EASTERN", 35), ("OUTER", 30),
    ]),
    ("INNER_EAST", &[
        ("INNER_CITY", 18), ("INNER_NORTH", 25), ("INNER_EAST", 12), ("INNER_SOUTH", 20),
        ("BAYSIDE", 25), ("EASTERN", 15), ("OUTER", 25),
    ]),
    ("INNER_SOUTH", &[
        ("INNER_CITY", 16), ("INNER_NORTH", 30), ("INNER_EAST", 20), ("INNER_SOUTH", 12),
        ("BAYSIDE", 18), ("EASTERN", 20), ("OUTER", 30),
    ]),
    ("BAYSIDE", &[
        ("INNER_CITY", 25), ("INNER_NORTH", 40), ("INNER_EAST", 25), ("INNER_SOUTH", 18),
        ("BAYSIDE", 12), ("EASTERN", 22), ("OUTER", 35),
    ]),
    ("EASTERN", &[
        ("INNER_CITY", 22), ("INNER_NORTH", 35), ("INNER_EAST", 15), ("INNER_SOUTH", 20),
        ("BAYSIDE", 22), ("EASTERN", 12), ("OUTER", 20),
    ]),
    ("OUTER", &[
        ("INNER_CITY", 35), ("INNER_NORTH", 30), ("INNER_EAST", 25), ("INNER_SOUTH", 30),
        ("BAYSIDE", 35), ("EASTERN", 20), ("OUTER", 25),
    ]),
];
