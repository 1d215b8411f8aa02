pub mod cli_consts {
    //! Page Configuration Constants
    //!
    //! This module contains all configuration constants for the page simulation,
    //! organized by functional area for clarity and maintainability.

    // =============================================================================
    // QUEUE CONFIGURATION
    // =============================================================================

    /// The maximum number of events to keep in the activity log.
    pub const MAX_ACTIVITY_LOGS: usize = 100;

    /// Maximum number of buffered events between the feed timer and the UI loop
    pub const EVENT_QUEUE_SIZE: usize = 100;

    /// How long the UI loop waits for input before drawing the next frame
    pub const FRAME_POLL_MS: u64 = 33;

    /// How long the splash screen stays up before the page is shown
    pub const SPLASH_DURATION_MS: u64 = 2_000;

    // =============================================================================
    // DONATION FEED
    // =============================================================================

    /// Donation feed configuration
    pub mod feed {
        /// Maximum number of entries the feed keeps (newest first)
        pub const CAPACITY: usize = 20;

        /// Entries generated when the page loads
        pub const INITIAL_ENTRIES: usize = 5;

        /// Entries generated by the refresh control
        pub const REFRESH_ENTRIES: usize = 3;

        /// Interval between live donations (milliseconds)
        pub const TICK_INTERVAL_MS: u64 = 3_000;

        /// Smallest generated donation, in cents
        pub const MIN_AMOUNT_CENTS: u64 = 1_000;

        /// Width of the generated donation range, in cents: [10.00, 110.00)
        pub const AMOUNT_SPAN_CENTS: u64 = 10_000;

        /// Upper bound for the "seconds ago" of backfilled entries
        pub const MAX_SECONDS_AGO: u64 = 60;
    }

    // =============================================================================
    // VOTING
    // =============================================================================

    /// Voting widget configuration
    pub mod voting {
        /// Mock voting power every viewer starts with
        pub const DEFAULT_VOTING_POWER: u64 = 1_000;

        /// Random baseline span added on top of each charity's floor
        pub const BASELINE_SPAN: u64 = 100;

        /// Baseline floors, in `CharityKey::ALL` order
        pub const BASELINE_FLOORS: [u64; 3] = [50, 30, 20];
    }

    // =============================================================================
    // OVERLAYS & EFFECTS
    // =============================================================================

    /// Toast and micro-animation timings
    pub mod timing {
        use std::time::Duration;

        /// How long a toast is fully shown
        pub const TOAST_DISPLAY_MS: u64 = 3_000;

        /// Duration of the toast exit transition
        pub const TOAST_EXIT_MS: u64 = 300;

        /// Section fade/slide-in once scrolled into view
        pub const SECTION_REVEAL_MS: u64 = 600;

        /// Sticker spin after a click
        pub const STICKER_SPIN_MS: u64 = 600;

        /// Membership card lift before settling
        pub const CARD_LIFT_MS: u64 = 200;

        /// Vote button pressed state
        pub const VOTE_PRESS_MS: u64 = 150;

        /// Vote button highlight after the press is released
        pub const VOTE_HIGHLIGHT_MS: u64 = 200;

        pub const fn toast_display() -> Duration {
            Duration::from_millis(TOAST_DISPLAY_MS)
        }

        pub const fn toast_lifetime() -> Duration {
            Duration::from_millis(TOAST_DISPLAY_MS + TOAST_EXIT_MS)
        }

        pub const fn section_reveal() -> Duration {
            Duration::from_millis(SECTION_REVEAL_MS)
        }
    }
}
