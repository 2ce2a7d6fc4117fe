//! # 婚恋模块 - 用户资料管理
//!
//! 本模块提供用户资料的创建、分段编辑、照片管理和浏览搜索功能。
//!
//! ## 功能概述
//!
//! - **资料创建**：用户自行创建，或由管理员代为录入（粘贴简历解析后提交）
//! - **资料更新**：按字段稀疏更新，只覆盖提交的字段
//! - **照片管理**：上传、移除照片，设置头像
//! - **浏览搜索**：按性别、年龄、婚姻状况、种姓、城市筛选
//!
//! ## 字段编码
//!
//! 更新条目为 `(ProfileField, 字节串)`：
//! - 年龄类字段：ASCII 十进制（18..=100）
//! - 性别：`male` / `female` / `other`
//! - 婚姻状况：`never_married` / `married` / `divorced` / `widowed` / `separated`
//! - 多偶意愿：`yes` / `no` / `maybe`
//! - 其他字段：UTF-8 文本
//!
//! 空字节串表示清除该字段。

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub use pallet::*;

pub mod fields;
pub mod weights;
pub use fields::ProfileFields;
pub use weights::WeightInfo;

#[cfg(test)]
mod mock;


#[cfg(feature = "runtime-benchmarks")]
mod benchmarking;

use alloc::vec::Vec;
use frame_support::pallet_prelude::*;
use frame_system::pallet_prelude::*;
use pallet_matchmaking_common::{Gender, MaritalStatus, ProfileField, ProfileRegistry};

#[frame_support::pallet]
pub mod pallet {
    use super::*;

    /// 短文本（姓名、城市、职业等）
    pub type NameOf<T> = BoundedVec<u8, <T as Config>::MaxNameLen>;
    /// 长文本（自我介绍、择偶描述）
    pub type TextOf<T> = BoundedVec<u8, <T as Config>::MaxTextLen>;
    /// 照片 CID
    pub type CidOf<T> = BoundedVec<u8, <T as Config>::MaxCidLen>;
    /// 稀疏更新条目
    pub type FieldEntriesOf<T> =
        BoundedVec<(ProfileField, TextOf<T>), <T as Config>::MaxFieldsPerUpdate>;

    #[pallet::pallet]
    pub struct Pallet<T>(_);

    /// Pallet 配置
    #[pallet::config]
    pub trait Config: frame_system::Config {
        /// 运行时事件类型
        type RuntimeEvent: From<Event<Self>> + IsType<<Self as frame_system::Config>::RuntimeEvent>;

        /// 短文本最大长度
        #[pallet::constant]
        type MaxNameLen: Get<u32>;

        /// 长文本最大长度
        #[pallet::constant]
        type MaxTextLen: Get<u32>;

        /// CID 最大长度
        #[pallet::constant]
        type MaxCidLen: Get<u32>;

        /// 照片最大数量
        #[pallet::constant]
        type MaxPhotos: Get<u32>;

        /// 单次更新最多字段数
        #[pallet::constant]
        type MaxFieldsPerUpdate: Get<u32>;

        /// 管理员 Origin（代为录入资料）
        type AdminOrigin: EnsureOrigin<Self::RuntimeOrigin>;

        /// 权重信息
        type WeightInfo: WeightInfo;
    }

    // ========================================================================
    // 类型定义
    // ========================================================================

    /// 用户资料
    #[derive(Clone, Encode, Decode, TypeInfo, MaxEncodedLen, PartialEq, Eq, Debug)]
    #[scale_info(skip_type_params(T))]
    pub struct ProfileDetails<T: Config> {
        /// 资料字段
        pub fields: ProfileFields<T>,
        /// 头像 CID
        pub avatar_cid: Option<CidOf<T>>,
        /// 生活照片列表
        pub photo_cids: BoundedVec<CidOf<T>, T::MaxPhotos>,
        /// 是否由管理员录入
        pub created_by_admin: bool,
        /// 创建时间
        pub created_at: BlockNumberFor<T>,
        /// 最后更新时间
        pub updated_at: BlockNumberFor<T>,
    }

    // ========================================================================
    // 存储
    // ========================================================================

    /// 用户资料
    #[pallet::storage]
    pub type Profiles<T: Config> = StorageMap<
        _,
        Blake2_128Concat,
        T::AccountId,
        ProfileDetails<T>,
    >;

    /// 用户总数
    #[pallet::storage]
    pub type ProfileCount<T: Config> = StorageValue<_, u64, ValueQuery>;

    /// 性别索引（用于浏览筛选）
    #[pallet::storage]
    pub type GenderIndex<T: Config> = StorageDoubleMap<
        _,
        Blake2_128Concat,
        Gender,
        Blake2_128Concat,
        T::AccountId,
        (),
    >;

    // ========================================================================
    // 事件
    // ========================================================================

    #[pallet::event]
    #[pallet::generate_deposit(pub(super) fn deposit_event)]
    pub enum Event<T: Config> {
        /// 资料已创建
        ProfileCreated {
            who: T::AccountId,
            by_admin: bool,
        },
        /// 资料已更新
        ProfileUpdated {
            who: T::AccountId,
            fields: u32,
        },
        /// 资料已删除
        ProfileDeleted {
            who: T::AccountId,
        },
        /// 照片已上传
        PhotoUploaded {
            who: T::AccountId,
            cid: CidOf<T>,
            is_avatar: bool,
        },
        /// 照片已移除
        PhotoRemoved {
            who: T::AccountId,
            cid: CidOf<T>,
        },
    }

    // ========================================================================
    // 错误
    // ========================================================================

    #[pallet::error]
    pub enum Error<T> {
        /// 资料已存在
        ProfileAlreadyExists,
        /// 资料不存在
        ProfileNotFound,
        /// 字段值无法解析
        InvalidFieldValue,
        /// 文本过长
        TextTooLong,
        /// 无效的年龄范围
        InvalidAgeRange,
        /// 未提交任何字段
        NoFieldsProvided,
        /// 照片列表已满
        PhotoListFull,
        /// 照片不存在
        PhotoNotFound,
    }

    // ========================================================================
    // Extrinsics
    // ========================================================================

    #[pallet::call]
    impl<T: Config> Pallet<T> {
        /// 创建用户资料
        #[pallet::call_index(0)]
        #[pallet::weight(T::WeightInfo::create_profile())]
        pub fn create_profile(origin: OriginFor<T>, entries: FieldEntriesOf<T>) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::do_create(who, &entries, false)
        }

        /// 按字段更新资料
        #[pallet::call_index(1)]
        #[pallet::weight(T::WeightInfo::update_profile())]
        pub fn update_profile(origin: OriginFor<T>, entries: FieldEntriesOf<T>) -> DispatchResult {
            let who = ensure_signed(origin)?;
            ensure!(!entries.is_empty(), Error::<T>::NoFieldsProvided);

            let (old_gender, new_gender) = Profiles::<T>::try_mutate(&who, |maybe_profile| {
                let profile = maybe_profile.as_mut().ok_or(Error::<T>::ProfileNotFound)?;
                let old_gender = profile.fields.gender;

                profile.fields.apply_all(entries.iter().map(|(f, v)| (*f, v.as_slice())))?;
                profile.updated_at = frame_system::Pallet::<T>::block_number();

                Ok::<_, DispatchError>((old_gender, profile.fields.gender))
            })?;

            if old_gender != new_gender {
                if let Some(g) = old_gender {
                    GenderIndex::<T>::remove(g, &who);
                }
                if let Some(g) = new_gender {
                    GenderIndex::<T>::insert(g, &who, ());
                }
            }

            Self::deposit_event(Event::ProfileUpdated {
                who,
                fields: entries.len() as u32,
            });
            Ok(())
        }

        /// 删除资料
        #[pallet::call_index(2)]
        #[pallet::weight(T::WeightInfo::delete_profile())]
        pub fn delete_profile(origin: OriginFor<T>) -> DispatchResult {
            let who = ensure_signed(origin)?;

            let profile = Profiles::<T>::take(&who).ok_or(Error::<T>::ProfileNotFound)?;
            if let Some(g) = profile.fields.gender {
                GenderIndex::<T>::remove(g, &who);
            }
            ProfileCount::<T>::mutate(|c| *c = c.saturating_sub(1));

            Self::deposit_event(Event::ProfileDeleted { who });
            Ok(())
        }

        /// 管理员代为录入资料
        ///
        /// 管理员粘贴简历文本，经解析和人工校对后提交字段条目。
        #[pallet::call_index(3)]
        #[pallet::weight(T::WeightInfo::admin_create_profile())]
        pub fn admin_create_profile(
            origin: OriginFor<T>,
            owner: T::AccountId,
            entries: FieldEntriesOf<T>,
        ) -> DispatchResult {
            T::AdminOrigin::ensure_origin(origin)?;
            Self::do_create(owner, &entries, true)
        }

        /// 上传照片
        ///
        /// # 参数
        /// - `cid`: 照片的 IPFS CID
        /// - `is_avatar`: 是否设置为头像
        #[pallet::call_index(4)]
        #[pallet::weight(T::WeightInfo::upload_photo())]
        pub fn upload_photo(
            origin: OriginFor<T>,
            cid: CidOf<T>,
            is_avatar: bool,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;

            Profiles::<T>::try_mutate(&who, |maybe_profile| -> DispatchResult {
                let profile = maybe_profile.as_mut().ok_or(Error::<T>::ProfileNotFound)?;

                if is_avatar {
                    profile.avatar_cid = Some(cid.clone());
                } else {
                    profile.photo_cids.try_push(cid.clone())
                        .map_err(|_| Error::<T>::PhotoListFull)?;
                }
                profile.updated_at = frame_system::Pallet::<T>::block_number();
                Ok(())
            })?;

            Self::deposit_event(Event::PhotoUploaded { who, cid, is_avatar });
            Ok(())
        }

        /// 移除照片（包括头像）
        #[pallet::call_index(5)]
        #[pallet::weight(T::WeightInfo::remove_photo())]
        pub fn remove_photo(origin: OriginFor<T>, cid: CidOf<T>) -> DispatchResult {
            let who = ensure_signed(origin)?;

            Profiles::<T>::try_mutate(&who, |maybe_profile| -> DispatchResult {
                let profile = maybe_profile.as_mut().ok_or(Error::<T>::ProfileNotFound)?;

                let before = profile.photo_cids.len();
                profile.photo_cids.retain(|c| c != &cid);
                let removed_avatar = profile.avatar_cid.as_ref() == Some(&cid);
                if removed_avatar {
                    profile.avatar_cid = None;
                }
                ensure!(
                    removed_avatar || profile.photo_cids.len() < before,
                    Error::<T>::PhotoNotFound
                );
                profile.updated_at = frame_system::Pallet::<T>::block_number();
                Ok(())
            })?;

            Self::deposit_event(Event::PhotoRemoved { who, cid });
            Ok(())
        }
    }
}

// ============================================================================
// 浏览筛选
// ============================================================================

/// 资料筛选条件，未设置的条件不参与过滤
#[derive(Clone, Default, PartialEq, Eq, Debug)]
pub struct ProfileFilter {
    pub gender: Option<Gender>,
    pub min_age: Option<u8>,
    pub max_age: Option<u8>,
    pub marital_status: Option<MaritalStatus>,
    /// 大小写不敏感
    pub caste: Option<Vec<u8>>,
    /// 大小写不敏感
    pub city: Option<Vec<u8>>,
}

impl ProfileFilter {
    /// 检查资料是否满足条件
    pub fn matches<T: Config>(&self, fields: &ProfileFields<T>) -> bool {
        if self.gender.is_some() && fields.gender != self.gender {
            return false;
        }
        if self.min_age.is_some() || self.max_age.is_some() {
            let Some(age) = fields.age else { return false };
            if self.min_age.map_or(false, |min| age < min) || self.max_age.map_or(false, |max| age > max) {
                return false;
            }
        }
        if self.marital_status.is_some() && fields.marital_status != self.marital_status {
            return false;
        }
        text_matches(&self.caste, fields.caste.as_ref().map(|v| v.as_slice()))
            && text_matches(&self.city, fields.city.as_ref().map(|v| v.as_slice()))
    }
}

fn text_matches(wanted: &Option<Vec<u8>>, actual: Option<&[u8]>) -> bool {
    match (wanted, actual) {
        (None, _) => true,
        (Some(w), Some(a)) => w.trim_ascii().eq_ignore_ascii_case(a.trim_ascii()),
        (Some(_), None) => false,
    }
}

// ============================================================================
// 内部函数与查询接口
// ============================================================================

impl<T: Config> Pallet<T> {
    fn do_create(owner: T::AccountId, entries: &FieldEntriesOf<T>, by_admin: bool) -> DispatchResult {
        ensure!(!Profiles::<T>::contains_key(&owner), Error::<T>::ProfileAlreadyExists);

        let mut fields = ProfileFields::<T>::default();
        fields.apply_all(entries.iter().map(|(f, v)| (*f, v.as_slice())))?;

        let now = frame_system::Pallet::<T>::block_number();
        if let Some(g) = fields.gender {
            GenderIndex::<T>::insert(g, &owner, ());
        }

        Profiles::<T>::insert(&owner, ProfileDetails {
            fields,
            avatar_cid: None,
            photo_cids: BoundedVec::default(),
            created_by_admin: by_admin,
            created_at: now,
            updated_at: now,
        });
        ProfileCount::<T>::mutate(|c| *c = c.saturating_add(1));

        if by_admin {
            log::info!("📝 管理员录入资料，字段数 {}", entries.len());
        }

        Self::deposit_event(Event::ProfileCreated { who: owner, by_admin });
        Ok(())
    }

    /// 获取用户资料
    pub fn profile_of(account: &T::AccountId) -> Option<ProfileDetails<T>> {
        Profiles::<T>::get(account)
    }

    /// 按条件浏览资料（分页）
    ///
    /// 指定性别时走性别索引，否则遍历全部资料。
    pub fn search_profiles(filter: &ProfileFilter, offset: u32, limit: u32) -> Vec<T::AccountId> {
        let candidates: alloc::boxed::Box<dyn Iterator<Item = T::AccountId>> = match filter.gender {
            Some(g) => alloc::boxed::Box::new(GenderIndex::<T>::iter_key_prefix(g)),
            None => alloc::boxed::Box::new(Profiles::<T>::iter_keys()),
        };

        candidates
            .filter(|who| {
                Profiles::<T>::get(who).map_or(false, |p| filter.matches::<T>(&p.fields))
            })
            .skip(offset as usize)
            .take(limit as usize)
            .collect()
    }
}

impl<T: Config> ProfileRegistry<T::AccountId> for Pallet<T> {
    fn profile_exists(who: &T::AccountId) -> bool {
        Profiles::<T>::contains_key(who)
    }
}
