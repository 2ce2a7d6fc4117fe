//! # 资料字段
//!
//! 按 `ProfileField` 稀疏写入资料。每个条目只覆盖自己的字段，
//! 空值表示清除该字段；同一批次中重复的字段以最后一个为准。

use crate::pallet::{Config, Error, NameOf, TextOf};
use codec::{Decode, Encode, MaxEncodedLen};
use frame_support::{CloneNoBound, DefaultNoBound, EqNoBound, PartialEqNoBound, RuntimeDebugNoBound};
use pallet_matchmaking_common::{Gender, MaritalStatus, PolygamyPreference, ProfileField};
use scale_info::TypeInfo;

/// 最小年龄
pub const MIN_AGE: u8 = 18;
/// 最大年龄
pub const MAX_AGE: u8 = 100;

/// 资料字段集合
#[derive(
    CloneNoBound, PartialEqNoBound, EqNoBound, RuntimeDebugNoBound, DefaultNoBound,
    Encode, Decode, TypeInfo, MaxEncodedLen,
)]
#[scale_info(skip_type_params(T))]
pub struct ProfileFields<T: Config> {
    // ========== 基本信息 ==========
    pub first_name: Option<NameOf<T>>,
    pub last_name: Option<NameOf<T>>,
    pub gender: Option<Gender>,
    pub age: Option<u8>,
    pub marital_status: Option<MaritalStatus>,
    /// 身高，规范格式 `英尺'英寸`，也可能是原样文本
    pub height: Option<NameOf<T>>,

    // ========== 宗教与社群 ==========
    pub caste: Option<NameOf<T>>,
    pub sect: Option<NameOf<T>>,
    pub religion: Option<NameOf<T>>,

    // ========== 教育与职业 ==========
    pub education: Option<NameOf<T>>,
    pub field_of_study: Option<NameOf<T>>,
    pub occupation: Option<NameOf<T>>,
    pub income: Option<NameOf<T>>,

    // ========== 所在地 ==========
    pub city: Option<NameOf<T>>,
    pub country: Option<NameOf<T>>,

    // ========== 自我介绍 ==========
    pub about: Option<TextOf<T>>,
    pub looking_for: Option<TextOf<T>>,
    pub polygamy: Option<PolygamyPreference>,

    // ========== 家庭 ==========
    pub father_occupation: Option<NameOf<T>>,
    pub mother_occupation: Option<NameOf<T>>,
    pub siblings: Option<NameOf<T>>,

    // ========== 择偶条件 ==========
    pub partner_age_from: Option<u8>,
    pub partner_age_to: Option<u8>,
    pub partner_height: Option<NameOf<T>>,
    pub partner_caste: Option<NameOf<T>>,
    pub partner_education: Option<NameOf<T>>,
    pub partner_religious_values: Option<NameOf<T>>,
    pub partner_location: Option<NameOf<T>>,
}

impl<T: Config> ProfileFields<T> {
    /// 写入单个字段
    pub fn apply(&mut self, field: ProfileField, raw: &[u8]) -> Result<(), Error<T>> {
        use ProfileField as F;

        match field {
            F::FirstName => self.first_name = short::<T>(raw)?,
            F::LastName => self.last_name = short::<T>(raw)?,
            F::Gender => self.gender = tagged::<T, _>(raw, Gender::from_tag)?,
            F::Age => self.age = age::<T>(raw)?,
            F::MaritalStatus => self.marital_status = tagged::<T, _>(raw, MaritalStatus::from_tag)?,
            F::Height => self.height = short::<T>(raw)?,
            F::Caste => self.caste = short::<T>(raw)?,
            F::Sect => self.sect = short::<T>(raw)?,
            F::Religion => self.religion = short::<T>(raw)?,
            F::Education => self.education = short::<T>(raw)?,
            F::FieldOfStudy => self.field_of_study = short::<T>(raw)?,
            F::Occupation => self.occupation = short::<T>(raw)?,
            F::Income => self.income = short::<T>(raw)?,
            F::City => self.city = short::<T>(raw)?,
            F::Country => self.country = short::<T>(raw)?,
            F::About => self.about = long::<T>(raw)?,
            F::LookingFor => self.looking_for = long::<T>(raw)?,
            F::Polygamy => self.polygamy = tagged::<T, _>(raw, PolygamyPreference::from_tag)?,
            F::FatherOccupation => self.father_occupation = short::<T>(raw)?,
            F::MotherOccupation => self.mother_occupation = short::<T>(raw)?,
            F::Siblings => self.siblings = short::<T>(raw)?,
            F::PartnerAgeFrom => self.partner_age_from = age::<T>(raw)?,
            F::PartnerAgeTo => self.partner_age_to = age::<T>(raw)?,
            F::PartnerHeight => self.partner_height = short::<T>(raw)?,
            F::PartnerCaste => self.partner_caste = short::<T>(raw)?,
            F::PartnerEducation => self.partner_education = short::<T>(raw)?,
            F::PartnerReligiousValues => self.partner_religious_values = short::<T>(raw)?,
            F::PartnerLocation => self.partner_location = short::<T>(raw)?,
        }
        Ok(())
    }

    /// 依次写入多个字段
    pub fn apply_all<'a, I>(&mut self, entries: I) -> Result<(), Error<T>>
    where
        I: IntoIterator<Item = (ProfileField, &'a [u8])>,
    {
        for (field, raw) in entries {
            self.apply(field, raw)?;
        }
        self.ensure_partner_age_range()
    }

    /// 择偶年龄范围需满足 from <= to
    pub fn ensure_partner_age_range(&self) -> Result<(), Error<T>> {
        if let (Some(from), Some(to)) = (self.partner_age_from, self.partner_age_to) {
            if from > to {
                return Err(Error::<T>::InvalidAgeRange);
            }
        }
        Ok(())
    }
}

fn short<T: Config>(raw: &[u8]) -> Result<Option<NameOf<T>>, Error<T>> {
    let raw = raw.trim_ascii();
    if raw.is_empty() {
        return Ok(None);
    }
    NameOf::<T>::try_from(raw.to_vec())
        .map(Some)
        .map_err(|_| Error::<T>::TextTooLong)
}

fn long<T: Config>(raw: &[u8]) -> Result<Option<TextOf<T>>, Error<T>> {
    let raw = raw.trim_ascii();
    if raw.is_empty() {
        return Ok(None);
    }
    TextOf::<T>::try_from(raw.to_vec())
        .map(Some)
        .map_err(|_| Error::<T>::TextTooLong)
}

fn tagged<T: Config, V>(raw: &[u8], parse: fn(&[u8]) -> Option<V>) -> Result<Option<V>, Error<T>> {
    if raw.trim_ascii().is_empty() {
        return Ok(None);
    }
    parse(raw).map(Some).ok_or(Error::<T>::InvalidFieldValue)
}

/// 年龄：ASCII 十进制，范围 18..=100
fn age<T: Config>(raw: &[u8]) -> Result<Option<u8>, Error<T>> {
    let raw = raw.trim_ascii();
    if raw.is_empty() {
        return Ok(None);
    }
    let value = core::str::from_utf8(raw)
        .ok()
        .and_then(|s| s.parse::<u8>().ok())
        .ok_or(Error::<T>::InvalidFieldValue)?;
    if !(MIN_AGE..=MAX_AGE).contains(&value) {
        return Err(Error::<T>::InvalidFieldValue);
    }
    Ok(Some(value))
}
