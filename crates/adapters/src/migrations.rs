pub const MIGRATIONS: &[&str] = &[
    "CREATE TABLE IF NOT EXISTS photographers (
        id INTEGER PRIMARY KEY,
        name TEXT NOT NULL,
        city TEXT NOT NULL,
        country TEXT NOT NULL,
        tagline TEXT NOT NULL,
        price INTEGER NOT NULL DEFAULT 0 CHECK (price >= 0),
        portrait TEXT NOT NULL
    );",
    "CREATE TABLE IF NOT EXISTS media (
        id INTEGER PRIMARY KEY,
        photographer_id INTEGER NOT NULL REFERENCES photographers(id),
        title TEXT NOT NULL,
        image TEXT,
        video TEXT,
        likes INTEGER NOT NULL DEFAULT 0 CHECK (likes >= 0),
        date TEXT NOT NULL,
        CHECK ((image IS NULL) <> (video IS NULL))
    );
    CREATE INDEX IF NOT EXISTS idx_media_photographer ON media(photographer_id);",
    "CREATE TABLE IF NOT EXISTS contact_messages (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        photographer_id INTEGER NOT NULL REFERENCES photographers(id),
        first_name TEXT NOT NULL,
        last_name TEXT NOT NULL,
        email TEXT NOT NULL,
        message TEXT NOT NULL,
        received_at TEXT NOT NULL
    );",
];
