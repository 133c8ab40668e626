use std::io::{self, Write};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

/// Результат чтения числа из консоли
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberInput {
    Number(i32),
    Invalid,
}

/// Консольный ввод/вывод: построчное чтение и запись текста.
pub struct Console<R, W> {
    reader: R,
    out: W,
}

impl<R, W> Console<R, W>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    pub fn new(reader: R, out: W) -> Self {
        Self { reader, out }
    }

    /// Следующая строка ввода, `None` - конец ввода.
    ///
    /// Байты, не являющиеся UTF-8, заменяются на U+FFFD, а не обрывают сеанс.
    pub async fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut buf = Vec::new();
        if self.reader.read_until(b'\n', &mut buf).await? == 0 {
            return Ok(None);
        }

        let line = String::from_utf8_lossy(&buf);
        Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
    }

    pub async fn read_number(&mut self) -> io::Result<Option<NumberInput>> {
        Ok(self.read_line().await?.map(|line| match line.trim().parse() {
            Ok(n) => NumberInput::Number(n),
            Err(_) => NumberInput::Invalid,
        }))
    }

    pub fn print(&mut self, text: &str) -> io::Result<()> {
        self.out.write_all(text.as_bytes())?;
        self.out.flush()
    }

    pub fn println(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out, "{}", text)?;
        self.out.flush()
    }

    /// Пустая строка и сообщение, как перед каждым ответом программы
    pub fn notice(&mut self, text: &str) -> io::Result<()> {
        self.println("")?;
        self.println(text)
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
