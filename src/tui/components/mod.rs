pub mod dialog_view;
pub mod input_form;
pub mod method_list;
pub mod wallet_panel;

pub use dialog_view::DialogView;
pub use input_form::{InputForm, InputFormState};
pub use method_list::{MethodList, MethodListState};
pub use wallet_panel::{WalletPanel, WalletPanelState};
