//! Temporal expression resolver
//!
//! Runs five passes over the token list, each one skipping tokens an earlier
//! pass consumed:
//!
//! 1. relative offsets ("en 5 días", "2 semanas desde el sábado")
//! 2. calendar dates ("3 de agosto de 2018")
//! 3. relative days, weekdays and relative weeks/months/years
//! 4. the first clock time, with its meridiem
//! 5. fixed lexemes and parts of the day, only if pass 4 found no clock
//!
//! Date productions pick the base date, offsets are added to it, and the
//! time of day comes from passes 4 and 5.

use chrono::{
    Datelike, Duration, Months, NaiveDate, NaiveDateTime, NaiveTime, Timelike, Weekday,
};
use tracing::{debug, trace};

use crate::language::tables::{PeriodEntry, TemporalTable};
use crate::resolve::fraction::FractionResolver;
use crate::resolve::leftover::{ConsumedSet, LeftoverAssembler};
use crate::resolve::numeral::NumeralResolver;
use crate::types::{DateTimeMatch, Extraction, Number, TimeUnit, Token};

/// Function words of the temporal grammar
mod words {
    pub const IN: &str = "en";
    pub const WITHIN: &str = "dentro";
    pub const OF: &str = "de";
    pub const OF_THE: &str = "del";
    pub const SINCE: &str = "desde";
    pub const AFTER: &str = "después";
    pub const AND: &str = "y";
    pub const MINUS: &str = "menos";
    pub const AT: &str = "a";
    pub const UNTIL: &str = "hasta";
    pub const AGO: &str = "hace";
    pub const THE_HOURS: [&str; 2] = ["las", "la"];
    pub const THIS: &str = "esta";
    pub const PERIOD_PREPOSITIONS: [&str; 3] = ["por", "de", "en"];
    pub const PERIOD_DETERMINERS: [&str; 2] = ["la", "esta"];
    pub const MERIDIEM_PREPOSITIONS: [&str; 2] = ["de", "por"];
    pub const AM: &str = "am";
    pub const PM: &str = "pm";
    pub const PAST: [&str; 2] = ["pasado", "pasada"];
    pub const NEXT: [&str; 3] = ["siguiente", "próximo", "próxima"];
    pub const THAT: &str = "que";
    pub const COMES: &str = "viene";
}

/// Calendar and clock displacement accumulated from offset clauses
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Offset {
    months: i64,
    days: i64,
    seconds: i64,
}

impl Offset {
    fn add(&mut self, other: Offset) {
        self.months = self.months.saturating_add(other.months);
        self.days = self.days.saturating_add(other.days);
        self.seconds = self.seconds.saturating_add(other.seconds);
    }

    /// Offset of `amount` units; months and years must be whole, days and
    /// weeks must come to whole days
    fn of(amount: Number, unit: TimeUnit) -> Option<Offset> {
        let mut offset = Offset::default();
        match unit {
            TimeUnit::Year => offset.months = i64::try_from(amount.scale_exact(12)?).ok()?,
            TimeUnit::Month => offset.months = i64::try_from(amount.scale_exact(1)?).ok()?,
            TimeUnit::Week => offset.days = i64::try_from(amount.scale_exact(7)?).ok()?,
            TimeUnit::Day => offset.days = i64::try_from(amount.scale_exact(1)?).ok()?,
            TimeUnit::Hour | TimeUnit::Minute | TimeUnit::Second => {
                let seconds = amount.scale_rounded(unit.seconds()?)?;
                offset.seconds = i64::try_from(seconds).ok()?;
            }
        }
        Some(offset)
    }
}

/// Working state of one extraction
struct Resolution {
    consumed: ConsumedSet,
    date: Option<NaiveDate>,
    offset: Offset,
    offset_found: bool,
    time: Option<NaiveTime>,
    clock_found: bool,
}

/// Resolves date-time phrases against an anchor
pub struct TemporalResolver<'a> {
    table: &'a TemporalTable,
    numerals: NumeralResolver<'a>,
    fractions: FractionResolver<'a>,
}

impl<'a> TemporalResolver<'a> {
    pub fn new(
        table: &'a TemporalTable,
        numerals: NumeralResolver<'a>,
        fractions: FractionResolver<'a>,
    ) -> Self {
        Self {
            table,
            numerals,
            fractions,
        }
    }

    /// Resolve `tokens` against `anchor`
    ///
    /// Tokens must be lowercased and plural-folded.
    pub fn resolve(&self, tokens: &[Token], anchor: NaiveDateTime) -> Extraction<DateTimeMatch> {
        let mut res = Resolution {
            consumed: ConsumedSet::new(tokens.len()),
            date: None,
            offset: Offset::default(),
            offset_found: false,
            time: None,
            clock_found: false,
        };

        self.scan_offsets(tokens, anchor, &mut res);
        self.scan_calendar_dates(tokens, anchor, &mut res);
        self.scan_relative_days(tokens, anchor, &mut res);
        self.scan_clock(tokens, &mut res);
        self.scan_day_periods(tokens, &mut res);

        let assembler = LeftoverAssembler::without_filler(self.table);
        let value = if res.consumed.any() {
            self.combine(&res, anchor)
        } else {
            None
        };

        let Some(mut value) = value else {
            // Nothing resolved, so every word goes back to the caller
            debug!("no temporal expression found");
            return Extraction {
                value: None,
                leftover: assembler.assemble(tokens, &ConsumedSet::new(tokens.len())),
            };
        };

        let leftover = assembler.assemble(tokens, &res.consumed);
        debug!(datetime = %value.datetime, %leftover, "resolved date-time");
        value.consumed = res.consumed.indices();
        Extraction {
            value: Some(value),
            leftover,
        }
    }

    fn combine(&self, res: &Resolution, anchor: NaiveDateTime) -> Option<DateTimeMatch> {
        let base_date = res.date.unwrap_or(anchor.date());
        let sub_day = res.offset.seconds != 0;

        let time = match res.time {
            Some(time) => time,
            None if sub_day => anchor.time(),
            None => NaiveTime::MIN,
        };

        let mut datetime = apply_offset(base_date.and_time(time), res.offset)?;

        // A lone time of day already gone today means tomorrow
        if res.date.is_none() && !res.offset_found && res.time.is_some() && datetime < anchor {
            trace!("time already passed, moving to next day");
            datetime = datetime.checked_add_signed(Duration::try_days(1)?)?;
        }

        Some(DateTimeMatch {
            datetime,
            consumed: Default::default(),
            has_time: res.time.is_some() || sub_day,
        })
    }

    fn text<'t>(&self, tokens: &'t [Token], index: usize) -> Option<&'t str> {
        tokens.get(index).map(|t| t.text.as_str())
    }

    fn is_word(&self, tokens: &[Token], index: usize, word: &str) -> bool {
        self.text(tokens, index) == Some(word)
    }

    fn is_any(&self, tokens: &[Token], index: usize, set: &[&str]) -> bool {
        self.text(tokens, index).is_some_and(|t| set.contains(&t))
    }

    fn free_word(&self, tokens: &[Token], res: &Resolution, index: usize, word: &str) -> bool {
        !res.consumed.is_consumed(index) && self.is_word(tokens, index, word)
    }

    /// Amount at `start`: a fraction phrase, a numeral run or digits
    fn quantity_at(&self, tokens: &[Token], start: usize) -> Option<(Number, usize)> {
        if let Some(m) = self.fractions.fraction_at(tokens, start) {
            return Some((m.number, m.span.end));
        }
        self.numerals
            .cardinal_at(tokens, start)
            .map(|(value, end)| (Number::integer(value), end))
    }

    /// Fraction without numerator, as in "y cuarto" or "menos cuarto"
    fn bare_fraction_at(&self, tokens: &[Token], start: usize) -> Option<(Number, usize)> {
        if let Some(found) = self.fractions.value_at(tokens, start) {
            return Some(found);
        }
        let denominator = self.fractions.denominator(tokens.get(start)?)?;
        Some((Number::new(1, denominator)?, start + 1))
    }

    // ---- pass 1: offsets ----

    fn scan_offsets(&self, tokens: &[Token], anchor: NaiveDateTime, res: &mut Resolution) {
        let mut i = 0;
        while i < tokens.len() {
            match self.offset_chain_at(tokens, res, anchor, i) {
                Some(end) => i = end,
                None => i += 1,
            }
        }
    }

    /// One clause: `Q U`, plus "y cuarto"/"y 45"/"menos 12" after hours
    fn offset_clause_at(&self, tokens: &[Token], start: usize) -> Option<(Offset, usize)> {
        let (amount, pos) = self.quantity_at(tokens, start)?;
        let unit = self.table.unit(self.text(tokens, pos)?)?;
        let mut offset = Offset::of(amount, unit)?;
        let mut end = pos + 1;

        if unit == TimeUnit::Hour {
            if let Some((minutes, next)) = self.hour_remainder_at(tokens, end) {
                offset.seconds = offset.seconds.saturating_add(minutes * 60);
                end = next;
            }
        }
        Some((offset, end))
    }

    /// Minutes that refine an hour amount: "y media", "y 45", "menos 12"
    fn hour_remainder_at(&self, tokens: &[Token], start: usize) -> Option<(i64, usize)> {
        let sign = match self.text(tokens, start)? {
            words::AND => 1,
            words::MINUS => -1,
            _ => return None,
        };
        let pos = start + 1;

        if let Some((fraction, end)) = self.bare_fraction_at(tokens, pos) {
            if !fraction.is_integer() && self.unit_at(tokens, end).is_none() {
                return Some((sign * fraction.scale_rounded(60)? as i64, end));
            }
        }

        let (minutes, end) = self
            .numerals
            .cardinal_at(tokens, pos)
            .filter(|(m, _)| *m < 60)?;
        match self.unit_at(tokens, end) {
            None => Some((sign * minutes as i64, end)),
            Some(TimeUnit::Minute) if sign < 0 => Some((-(minutes as i64), end + 1)),
            // "y 3 minutos" is a clause of its own
            Some(_) => None,
        }
    }

    fn unit_at(&self, tokens: &[Token], index: usize) -> Option<TimeUnit> {
        self.text(tokens, index).and_then(|t| self.table.unit(t))
    }

    fn offset_chain_at(
        &self,
        tokens: &[Token],
        res: &mut Resolution,
        anchor: NaiveDateTime,
        start: usize,
    ) -> Option<usize> {
        if res.consumed.is_consumed(start) {
            return None;
        }
        let (mut total, mut end) = self.offset_clause_at(tokens, start)?;
        let mut clauses = vec![(start, end)];

        while self.is_word(tokens, end, words::AND) {
            let Some((offset, next)) = self.offset_clause_at(tokens, end + 1) else {
                break;
            };
            total.add(offset);
            clauses.push((end + 1, next));
            end = next;
        }

        let head = self.offset_head(tokens, res, start);
        let tail = self.offset_tail(tokens, res, end);
        if head.is_none() && tail.is_none() {
            trace!(start, "offset without head or tail");
            return None;
        }

        let mut accumulated = res.offset;
        accumulated.add(total);
        if apply_offset(anchor, accumulated).is_none() {
            trace!(?total, "offset outside the calendar");
            return None;
        }

        for (from, to) in clauses {
            res.consumed.consume_range(from, to);
        }
        if let Some(head) = head {
            res.consumed.consume_range(head, start);
        }
        let mut next = end;
        if let Some(tail_end) = tail {
            res.consumed.consume_range(end, tail_end);
            next = tail_end;
        }

        debug!(?total, "offset");
        res.offset.add(total);
        res.offset_found = true;
        Some(next)
    }

    /// "en" or "dentro de" right before `start`
    fn offset_head(&self, tokens: &[Token], res: &Resolution, start: usize) -> Option<usize> {
        let before = start.checked_sub(1)?;
        if self.free_word(tokens, res, before, words::IN) {
            return Some(before);
        }
        let two_before = start.checked_sub(2)?;
        (self.free_word(tokens, res, two_before, words::WITHIN)
            && self.free_word(tokens, res, before, words::OF))
        .then_some(two_before)
    }

    /// "desde" or "después de|del" at `end`; returns one past the tail
    fn offset_tail(&self, tokens: &[Token], res: &Resolution, end: usize) -> Option<usize> {
        if self.free_word(tokens, res, end, words::SINCE) {
            return Some(end + 1);
        }
        (self.free_word(tokens, res, end, words::AFTER)
            && (self.free_word(tokens, res, end + 1, words::OF)
                || self.free_word(tokens, res, end + 1, words::OF_THE)))
        .then_some(end + 2)
    }

    // ---- pass 2: calendar dates ----

    fn scan_calendar_dates(&self, tokens: &[Token], anchor: NaiveDateTime, res: &mut Resolution) {
        for i in 0..tokens.len() {
            if res.date.is_some() {
                return;
            }
            if let Some((date, end)) = self.calendar_date_at(tokens, res, anchor, i) {
                debug!(%date, "calendar date");
                res.consumed.consume_range(i, end);
                res.date = Some(date);
            }
        }
    }

    fn calendar_date_at(
        &self,
        tokens: &[Token],
        res: &Resolution,
        anchor: NaiveDateTime,
        start: usize,
    ) -> Option<(NaiveDate, usize)> {
        let (day, mut pos) = self
            .numerals
            .cardinal_at(tokens, start)
            .or_else(|| {
                self.numerals
                    .match_ordinal(tokens, start)
                    .map(|m| (m.number.numerator(), m.span.end))
            })?;
        if !(1..=31).contains(&day) {
            return None;
        }

        if self.is_word(tokens, pos, words::OF) {
            pos += 1;
        }
        let month = self.table.month(self.text(tokens, pos)?)?;
        pos += 1;

        let mut year = None;
        if self.is_word(tokens, pos, words::OF) {
            if let Some((value, end)) = self.numerals.cardinal_at(tokens, pos + 1) {
                year = i32::try_from(value).ok();
                pos = end;
            }
        }
        if !res.consumed.all_free(start, pos) {
            return None;
        }

        let day = day as u32;
        let date = match year {
            Some(year) => NaiveDate::from_ymd_opt(year, month, day),
            None => {
                let year = if (month, day) < (anchor.month(), anchor.day()) {
                    anchor.year() + 1
                } else {
                    anchor.year()
                };
                NaiveDate::from_ymd_opt(year, month, day)
            }
        };
        if date.is_none() {
            trace!(day, month, ?year, "invalid calendar date");
        }
        Some((date?, pos))
    }

    // ---- pass 3: relative days and weekdays ----

    fn scan_relative_days(&self, tokens: &[Token], anchor: NaiveDateTime, res: &mut Resolution) {
        let today = anchor.date();
        for i in 0..tokens.len() {
            if res.date.is_some() {
                return;
            }
            if res.consumed.is_consumed(i) {
                continue;
            }
            let word = tokens[i].text.as_str();

            // "pasado mañana"
            if words::PAST.contains(&word) {
                if let Some(days) = self
                    .text(tokens, i + 1)
                    .filter(|_| !res.consumed.is_consumed(i + 1))
                    .and_then(|next| self.table.relative_day(next))
                    .filter(|days| *days == 1)
                {
                    res.consumed.consume_range(i, i + 2);
                    res.date = shift_days(today, days + 1);
                    debug!(date = ?res.date, "day after tomorrow");
                }
                continue;
            }

            if let Some(days) = self.table.relative_day(word) {
                if self.table.period(word).is_some() && self.names_period(tokens, i) {
                    continue;
                }
                res.consumed.consume(i);
                res.date = shift_days(today, days);
                debug!(word, date = ?res.date, "relative day");
                continue;
            }

            if let Some(weekday) = self.table.weekday(word) {
                res.date = self.weekday_date(tokens, res, today, weekday, i);
                debug!(word, date = ?res.date, "weekday");
                continue;
            }

            if let Some(date) = self.relative_unit(tokens, res, anchor, i) {
                res.date = Some(date);
                debug!(word, %date, "relative period");
            }
        }
    }

    /// Whether the word at `index` names a part of the day: preceded by
    /// "por la", "de esta", "en la" or "esta"
    fn names_period(&self, tokens: &[Token], index: usize) -> bool {
        let Some(before) = index.checked_sub(1) else {
            return false;
        };
        if self.is_word(tokens, before, words::THIS) {
            return true;
        }
        index >= 2
            && self.is_any(tokens, index - 2, &words::PERIOD_PREPOSITIONS)
            && self.is_any(tokens, before, &words::PERIOD_DETERMINERS)
    }

    fn weekday_date(
        &self,
        tokens: &[Token],
        res: &mut Resolution,
        today: NaiveDate,
        weekday: Weekday,
        index: usize,
    ) -> Option<NaiveDate> {
        let before = index.checked_sub(1).filter(|b| !res.consumed.is_consumed(*b));
        let after = Some(index + 1).filter(|a| !res.consumed.is_consumed(*a));

        let qualifier = |i: Option<usize>, set: &[&str]| i.filter(|i| self.is_any(tokens, *i, set));

        let (date, qualified) =
            if let Some(i) = qualifier(before, &words::PAST).or(qualifier(after, &words::PAST)) {
                (previous_weekday(today, weekday)?, Some(i))
            } else if let Some(i) = qualifier(before, &words::NEXT) {
                let next = next_weekday(today, weekday)?;
                (shift_days(next, 7)?, Some(i))
            } else {
                (next_weekday(today, weekday)?, None)
            };

        res.consumed.consume(index);
        if let Some(i) = qualified {
            res.consumed.consume(i);
        }
        Some(date)
    }

    /// "la semana que viene", "el mes pasado", "el próximo año"
    fn relative_unit(
        &self,
        tokens: &[Token],
        res: &mut Resolution,
        anchor: NaiveDateTime,
        index: usize,
    ) -> Option<NaiveDate> {
        let unit = self.table.unit(&tokens[index].text)?;
        if !matches!(unit, TimeUnit::Week | TimeUnit::Month | TimeUnit::Year) {
            return None;
        }

        let free = |i: usize| !res.consumed.is_consumed(i);
        let (step, from, to) = if free(index + 1)
            && free(index + 2)
            && self.is_word(tokens, index + 1, words::THAT)
            && self.is_word(tokens, index + 2, words::COMES)
        {
            (1, index, index + 3)
        } else if free(index + 1) && self.is_any(tokens, index + 1, &words::PAST) {
            (-1, index, index + 2)
        } else if index > 0 && free(index - 1) && self.is_any(tokens, index - 1, &words::PAST) {
            (-1, index - 1, index + 1)
        } else if index > 0 && free(index - 1) && self.is_any(tokens, index - 1, &words::NEXT) {
            (1, index - 1, index + 1)
        } else {
            return None;
        };

        let offset = Offset::of(Number::integer(1), unit)?;
        let date = add_months(anchor.date().and_time(NaiveTime::MIN), step * offset.months)?
            .checked_add_signed(Duration::try_days(step * offset.days)?)?
            .date();
        res.consumed.consume_range(from, to);
        Some(date)
    }

    // ---- pass 4: clock times ----

    fn scan_clock(&self, tokens: &[Token], res: &mut Resolution) {
        for i in 0..tokens.len() {
            if res.consumed.is_consumed(i) {
                continue;
            }

            let marked = self.is_any(tokens, i, &words::THE_HOURS);
            let hour_at = if marked { i + 1 } else { i };
            let Some((hour, minute, clock_end, bare)) = self.clock_at(tokens, res, hour_at, marked)
            else {
                continue;
            };
            let (hour, end) = self.apply_meridiem(tokens, res, hour, clock_end);

            // "compra las 2 entradas": a bare "las N" needs "a"/"hasta" or a meridiem
            if bare
                && end == clock_end
                && !(i > 0 && self.is_any(tokens, i - 1, &[words::AT, words::UNTIL]))
            {
                trace!(index = i, "bare count after article, not a clock time");
                continue;
            }

            let Some(time) = NaiveTime::from_hms_opt(hour, minute, 0) else {
                continue;
            };

            let mut start = i;
            if marked && start > 0 && self.free_word(tokens, res, start - 1, words::AT) {
                start -= 1;
            }
            res.consumed.consume_range(start, end);
            res.time = Some(time);
            res.clock_found = true;
            debug!(%time, "clock time");
            return;
        }
    }

    /// Hour, minute and end at `start`; `marked` allows the bare "H MM"
    /// form. The flag is set when nothing but the number itself was read.
    fn clock_at(
        &self,
        tokens: &[Token],
        res: &Resolution,
        start: usize,
        marked: bool,
    ) -> Option<(u32, u32, usize, bool)> {
        let token = tokens.get(start)?;
        if res.consumed.is_consumed(start) {
            return None;
        }

        let mut bare = false;
        let (hour, mut minute, mut end) = if let Some((hour, minute)) = token.colon_pair() {
            (hour, Some(minute), start + 1)
        } else if let Some(hour) = compact_hour(&token.text) {
            (hour, None, start + 1)
        } else {
            let (value, pos) = self.numerals.cardinal_at(tokens, start)?;
            if start > 0 && self.is_word(tokens, start - 1, words::AGO) {
                // "hace dos horas" is a past offset, not a clock time
                return None;
            }
            match self.unit_at(tokens, pos) {
                // "1700 horas"
                Some(TimeUnit::Hour) if token.is_digits() && token.text.len() >= 3 => {
                    (value / 100, Some(value % 100), pos + 1)
                }
                Some(TimeUnit::Hour) => (value, None, pos + 1),
                Some(unit) => {
                    trace!(?unit, "number followed by a non-hour unit");
                    return None;
                }
                None if marked => {
                    bare = true;
                    (value, None, pos)
                }
                None => return None,
            }
        };
        if !res.consumed.all_free(start, end) {
            return None;
        }

        let mut hour = hour;
        if minute.is_none() {
            if let Some((adjusted, m, next)) = self.minute_words_at(tokens, res, hour, end) {
                hour = adjusted;
                minute = Some(m);
                end = next;
            } else if let Some((m, next)) = self
                .numerals
                .cardinal_at(tokens, end)
                .filter(|(m, next)| *m <= 59 && self.unit_at(tokens, *next).is_none())
            {
                // "a las 3 45", "20 horas 30"
                if marked || end > start + 1 {
                    minute = Some(m);
                    end = next;
                }
            }
        }

        let bare = bare && minute.is_none();
        let minute = minute.unwrap_or(0);
        if hour > 24 || minute > 59 {
            trace!(hour, minute, "clock time out of range");
            return None;
        }
        Some(((hour % 24) as u32, minute as u32, end, bare))
    }

    /// "y media", "y cuarto", "y diez", "menos cuarto", "menos diez"
    fn minute_words_at(
        &self,
        tokens: &[Token],
        res: &Resolution,
        hour: u64,
        start: usize,
    ) -> Option<(u64, u64, usize)> {
        let (minutes, end) = match self.hour_remainder_at(tokens, start) {
            Some(found) => found,
            // "y 3 minutos"
            None if self.is_word(tokens, start, words::AND) => {
                let (m, end) = self.numerals.cardinal_at(tokens, start + 1)?;
                if self.unit_at(tokens, end) != Some(TimeUnit::Minute) {
                    return None;
                }
                (m as i64, end)
            }
            None => return None,
        };
        let end = if self.unit_at(tokens, end) == Some(TimeUnit::Minute) {
            end + 1
        } else {
            end
        };
        if !res.consumed.all_free(start, end) || minutes.unsigned_abs() > 59 {
            return None;
        }

        if minutes >= 0 {
            Some((hour, minutes as u64, end))
        } else {
            let hour = if hour == 0 { 23 } else { hour - 1 };
            Some((hour, 60 - minutes.unsigned_abs(), end))
        }
    }

    /// Apply "am"/"pm" or "de la tarde" after a clock time
    fn apply_meridiem(
        &self,
        tokens: &[Token],
        res: &Resolution,
        hour: u32,
        end: usize,
    ) -> (u32, usize) {
        match self.text(tokens, end) {
            Some(words::PM) if !res.consumed.is_consumed(end) => {
                return (if hour < 12 { hour + 12 } else { hour }, end + 1);
            }
            Some(words::AM) if !res.consumed.is_consumed(end) => {
                return (if hour == 12 { 0 } else { hour }, end + 1);
            }
            _ => {}
        }

        if self.is_any(tokens, end, &words::MERIDIEM_PREPOSITIONS)
            && self.is_any(tokens, end + 1, &words::PERIOD_DETERMINERS)
            && res.consumed.all_free(end, end + 3)
        {
            if let Some(period) = self.text(tokens, end + 2).and_then(|w| self.table.period(w)) {
                return (shift_hour(hour, period), end + 3);
            }
        }
        (hour, end)
    }

    // ---- pass 5: parts of the day ----

    fn scan_day_periods(&self, tokens: &[Token], res: &mut Resolution) {
        if let Some((start, end, mut time)) = self.period_phrase(tokens, res) {
            // "a las 8 ... por la tarde": the period only shifts the clock
            if let Some(clock) = res.time.filter(|_| res.clock_found) {
                let Some(period) = self.table.period(&tokens[end - 1].text) else {
                    return;
                };
                time = clock
                    .with_hour(shift_hour(clock.hour(), period))
                    .unwrap_or(clock);
            }
            res.consumed.consume_range(start, end);
            res.time = Some(time);
            debug!(%time, "part of the day");
            return;
        }

        if res.clock_found {
            return;
        }
        if let Some((start, end, time)) = self.fixed_time(tokens, res) {
            res.consumed.consume_range(start, end);
            res.time = Some(time);
            debug!(%time, "fixed time");
        }
    }

    /// "por la tarde", "de esta noche", "esta mañana"
    fn period_phrase(&self, tokens: &[Token], res: &Resolution) -> Option<(usize, usize, NaiveTime)> {
        (0..tokens.len()).find_map(|i| {
            if res.consumed.is_consumed(i) {
                return None;
            }
            let period = self.table.period(&tokens[i].text)?;
            if !self.names_period(tokens, i) {
                return None;
            }
            let start = if self.is_word(tokens, i - 1, words::THIS)
                && !(i >= 2 && self.is_any(tokens, i - 2, &words::PERIOD_PREPOSITIONS))
            {
                i - 1
            } else {
                i - 2
            };
            if !res.consumed.all_free(start, i + 1) {
                return None;
            }
            Some((start, i + 1, NaiveTime::from_hms_opt(period.hour, 0, 0)?))
        })
    }

    fn fixed_time(&self, tokens: &[Token], res: &Resolution) -> Option<(usize, usize, NaiveTime)> {
        for entry in self.table.fixed_times() {
            for i in 0..tokens.len() {
                let end = i + entry.words.len();
                if end > tokens.len() || !res.consumed.all_free(i, end) {
                    continue;
                }
                if !tokens[i..end]
                    .iter()
                    .zip(&entry.words)
                    .all(|(t, w)| t.text == *w)
                {
                    continue;
                }

                let start = if entry.requires_preposition {
                    match i.checked_sub(1) {
                        Some(before) if self.free_word(tokens, res, before, words::AT) => before,
                        _ => continue,
                    }
                } else {
                    i
                };
                let time = NaiveTime::from_hms_opt(entry.hour, entry.minute, 0)?;
                return Some((start, end, time));
            }
        }
        None
    }
}

/// Move a clock hour into the period it was qualified with
fn shift_hour(hour: u32, period: PeriodEntry) -> u32 {
    if hour == 12 && period.twelve_is_midnight {
        0
    } else if period.afternoon && hour < 12 {
        hour + 12
    } else {
        hour
    }
}

/// "18h"
fn compact_hour(text: &str) -> Option<u64> {
    let digits = text.strip_suffix('h')?;
    if digits.is_empty() || digits.len() > 2 || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

fn shift_days(date: NaiveDate, days: i64) -> Option<NaiveDate> {
    date.checked_add_signed(Duration::try_days(days)?)
}

/// Months first, then days, then seconds
fn apply_offset(datetime: NaiveDateTime, offset: Offset) -> Option<NaiveDateTime> {
    add_months(datetime, offset.months)?
        .checked_add_signed(Duration::try_days(offset.days)?)?
        .checked_add_signed(Duration::try_seconds(offset.seconds)?)
}

fn add_months(datetime: NaiveDateTime, months: i64) -> Option<NaiveDateTime> {
    let count = Months::new(u32::try_from(months.unsigned_abs()).ok()?);
    if months >= 0 {
        datetime.checked_add_months(count)
    } else {
        datetime.checked_sub_months(count)
    }
}

/// Next occurrence strictly after `from`, `None` past the calendar's end
pub fn next_weekday(from: NaiveDate, weekday: Weekday) -> Option<NaiveDate> {
    let ahead = (7 + weekday.num_days_from_monday() as i64
        - from.weekday().num_days_from_monday() as i64)
        % 7;
    shift_days(from, if ahead == 0 { 7 } else { ahead })
}

/// Last occurrence strictly before `from`, `None` before the calendar's start
pub fn previous_weekday(from: NaiveDate, weekday: Weekday) -> Option<NaiveDate> {
    let back = (7 + from.weekday().num_days_from_monday() as i64
        - weekday.num_days_from_monday() as i64)
        % 7;
    shift_days(from, -(if back == 0 { 7 } else { back }))
}
