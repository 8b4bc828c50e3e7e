//! # TUI Components
//!
//! This module contains all UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! Components in this directory follow two patterns:
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Display components that receive all data as parameters:
//! - `TitleBar`: Top status bar showing screen and status
//! - `InputField`, `CloseButton`, `ConfirmationBox`, `Loading`: modal leaves
//! - `DashboardPanel`: Static panel for the dashboard tag
//! - `EnquiryModal`: Enquiry form overlay, also maps keys to actions
//!
//! ### Stateful Components (Persistent State + Transient Wrapper)
//!
//! The state struct lives in `TuiState`; the wrapper borrows it each frame:
//! - `HotelPickerState` / `HotelPicker`: Hotel list selection
//! - `MessagesTableState` / `MessagesTable`: Inbox table scroll position
//!
//! ### Props-Based Data Flow
//!
//! Components receive external data as "props", not by reaching into `App`.
//!
//! ```rust,ignore
//! // Good: Dependencies are explicit
//! TitleBar::new(app.screen.label(), &app.status_message).render(frame, area);
//!
//! // Bad: Hidden dependency on global state
//! title_bar.render(frame, area); // reads from global App
//! ```
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs              (this file)
//! ├── title_bar.rs        (Top status bar)
//! ├── hotel_picker.rs     (Hotels screen)
//! ├── messages_table.rs   (Messages screen)
//! ├── dashboard_panel.rs  (Dashboard screen)
//! ├── enquiry_modal.rs    (Enquiry overlay + hit testing)
//! ├── input_field.rs      (Labelled text field)
//! ├── close_button.rs     ([x] control)
//! ├── confirmation_box.rs (Outcome banner)
//! └── loading.rs          (Spinner placeholder)
//! ```

pub mod close_button;
pub mod confirmation_box;
pub mod dashboard_panel;
pub mod enquiry_modal;
pub mod hotel_picker;
pub mod input_field;
pub mod loading;
pub mod messages_table;
mod title_bar;

pub use dashboard_panel::DashboardPanel;
pub use enquiry_modal::{EnquiryModal, ModalHit, ModalLayout};
pub use hotel_picker::{HotelPicker, HotelPickerState};
pub use messages_table::{MessagesTable, MessagesTableState};
pub use title_bar::TitleBar;
