use std::cell::RefCell;

/// Синхронный вопрос пользователю "да/нет"
pub trait Confirmation {
    fn confirm(&self, message: &str) -> bool;
}

impl<F: Fn(&str) -> bool> Confirmation for F {
    fn confirm(&self, message: &str) -> bool {
        self(message)
    }
}

/// Подтверждение из HTTP-запроса: ответ известен заранее (`confirmed` в теле),
/// а текст вопроса сохраняется, чтобы вернуть его клиенту.
#[derive(Debug, Default)]
pub struct RequestConfirmation {
    confirmed: bool,
    prompt: RefCell<Option<String>>,
}

impl RequestConfirmation {
    pub fn new(confirmed: bool) -> Self {
        Self { confirmed, prompt: RefCell::new(None) }
    }

    /// Текст последнего вопроса, если он был задан
    pub fn into_prompt(self) -> Option<String> {
        self.prompt.into_inner()
    }
}

impl Confirmation for RequestConfirmation {
    fn confirm(&self, message: &str) -> bool {
        *self.prompt.borrow_mut() = Some(message.to_string());
        self.confirmed
    }
}
