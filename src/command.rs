/// Everything the editor can be asked to do in response to a key.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    MoveLeft,
    MoveRight,
    MoveUp,
    MoveDown,
    MoveLineStart,
    MoveLineEnd,
    MoveWordForward,
    MoveWordBackward,
    MoveParagraphForward,
    MoveParagraphBackward,
    InsertChar(char),
    InsertNewline,
    DeleteCharBefore,
    DeleteCharAfter,
    DeleteWordLeft,
    DeleteWordRight,
    Undo,
    SetMark,
    KillLine,
    DeleteRegion,
    Yank,
    StartSearch,
    SearchInput(char),
    SearchBackspace,
    EndSearch,
    PromptInput(char),
    PromptBackspace,
    PromptSubmit,
    PromptCancel,
    SaveFile,
    SwitchBuffer,
    ShowInfo,
    Quit,
}
