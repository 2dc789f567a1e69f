use crate::session::Direction;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Quit,
    ToggleHelp,
    CycleLanguage,
    Resize,
    Reset,

    FocusPrompt,
    FocusBrowse,

    // Text entry into whichever buffer is focused
    InputChar(char),
    Backspace,
    ClearInput,
    Submit,

    ListUp,
    ListDown,
    GoTop,
    GoBottom,
    Activate,
    SwitchTab,
    ToggleFavorite,
    ToggleEditing,
    DeleteSelected,
    MoveSelected(Direction),

    OpenAddForm,
    FormNextField,
    FormPrevField,
    FormSubmit,
    FormCancel,

    // Detail view
    Back,
    EditKeywords,
    FinishKeywords,
    GenerateImage,
    DiscardImage,
    Export,
    CopyColor(usize),
}
