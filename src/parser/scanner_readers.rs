// Методы чтения отдельных видов токенов для сканера

impl Scanner {
    /// Пропускает пробельные символы
    pub(crate) fn skip_whitespace(&self, reader: &mut CharReader) -> Result<()> {
        loop {
            self.check_cancelled()?;
            match reader.peek() {
                Some(ch) if ch.is_whitespace() => {
                    reader.read();
                }
                _ => break,
            }
        }
        Ok(())
    }

    /// Читает строковый литерал в кавычках
    ///
    /// Обрамляющие кавычки в нагрузку не входят. Обратная косая черта
    /// экранирует следующий символ: он попадает в нагрузку как есть,
    /// сама косая черта отбрасывается. Конец входа до закрывающей
    /// кавычки считается лексической ошибкой.
    pub(crate) fn read_quoted_string(
        &self,
        reader: &mut CharReader,
        quote_char: char,
        start_position: Position,
    ) -> Result<Token> {
        let mut value = String::new();
        let mut escaped = false;

        loop {
            self.check_cancelled()?;
            let ch = match reader.read() {
                Some(ch) => ch,
                None => {
                    return Err(Error::lex(
                        start_position.line,
                        start_position.column,
                        "unterminated quoted string",
                    ));
                }
            };

            if escaped {
                value.push(ch);
                escaped = false;
            } else if ch == '\\' {
                escaped = true;
            } else if ch == quote_char {
                break;
            } else {
                value.push(ch);
            }
        }

        Ok(Token::quoted_string(value, start_position))
    }

    /// Читает числовой литерал
    ///
    /// Принимает максимальную серию цифр и не более одной десятичной
    /// точки; вторая точка считается лексической ошибкой. Нагрузка
    /// остаётся текстом, преобразование в число здесь не выполняется.
    ///
    /// Ведущий знак `+`/`-` сознательно не распознаётся как часть
    /// числа и приходит отдельным символьным токеном.
    pub(crate) fn read_number(
        &self,
        reader: &mut CharReader,
        start_position: Position,
    ) -> Result<Token> {
        let mut value = String::new();
        let mut decimal_points = 0usize;

        loop {
            self.check_cancelled()?;
            let char_position = reader.position();
            let ch = match reader.read() {
                Some(ch) => ch,
                None => break,
            };

            if ch.is_ascii_digit() {
                value.push(ch);
            } else if ch == '.' {
                decimal_points += 1;
                if decimal_points > 1 {
                    return Err(Error::lex(
                        char_position.line,
                        char_position.column,
                        "second decimal point in numeric literal",
                    ));
                }
                value.push(ch);
            } else {
                reader.unread();
                break;
            }
        }

        let token = if decimal_points > 0 {
            Token::float(value, start_position)
        } else {
            Token::integer(value, start_position)
        };

        Ok(token)
    }

    /// Читает идентификатор
    ///
    /// Первый символ обязан быть буквой, продолжение состоит из букв и
    /// цифр. Подчёркивание в алфавит идентификаторов не входит. Первый
    /// неподходящий символ возвращается в поток и разбирается как
    /// отдельный токен.
    pub(crate) fn read_identifier(
        &self,
        reader: &mut CharReader,
        start_position: Position,
    ) -> Result<Token> {
        let mut value = String::new();

        loop {
            self.check_cancelled()?;
            let ch = match reader.read() {
                Some(ch) => ch,
                None => break,
            };

            let accepted = if value.is_empty() {
                ch.is_alphabetic()
            } else {
                ch.is_alphanumeric()
            };

            if accepted {
                value.push(ch);
            } else {
                reader.unread();
                break;
            }
        }

        Ok(Token::identifier(value, start_position))
    }
}
