/// Every user-facing message clockout prints.
///
/// Text lives in the `Display` impl in `display.rs`; call sites only pick a
/// variant and pass its parameters.
#[derive(Debug, Clone)]
pub enum Message {
    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigDeleted,
    ConfigNothingToDelete,
    ConfigModuleKeka,
    ConfigModuleWorkday,

    // === TOKEN MESSAGES ===
    TokenStored,
    TokenCleared,
    TokenNotStored,
    TokenImported(String), // storage source, e.g. localStorage:access_token
    TokenNotInDump,
    TokenNotJwt,
    TokenResolved { origin: String, masked: String },

    // === ATTENDANCE MESSAGES ===
    FetchingAttendance(String), // subdomain or file
    FetchFailed(String),        // error
    AttendanceHeader(String),   // formatted date
    WorkedTotal(String),        // HH:MM:SS
    ExpectedOut(String),        // time
    DayComplete,
    NotClockedIn,
    LastOut(String), // time
    NoEntries,
    EntriesHeader,
    SessionsHeader,
    CachedFetchFrom(String), // generated at
    NoCachedFetch,
    CacheSaveFailed(String), // error

    // === REMINDER MESSAGES ===
    ReminderAdded(String),    // id
    ReminderDeleted(String),  // id
    ReminderNotFound(String), // id
    ReminderInvalid(String),  // validation error
    NoReminders,
    RemindersHeader,
    ReminderDue { time: String, message: String },
    UpcomingReminder { time: String, message: String },

    // === WATCH MESSAGES ===
    WatchStarted(u64), // refresh interval, minutes
    WatchStopped,
    WatchReceivedCtrlC,
    WatchCtrlCListenFailed(String), // error
    WatchRefreshFailed(String),     // error
    WatchIntervalInvalid(u64),      // minutes

    // === PROMPTS ===
    PromptSelectModules,
    PromptKekaSubdomain,
    PromptDailyTarget,
    PromptRefreshInterval,
}
