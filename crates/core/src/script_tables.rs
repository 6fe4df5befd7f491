//! Static Simplified/Traditional tables used by [`TableConverter`].
//!
//! Character tables cover the CJK Unified Ideographs block and Extension A.
//! The pairs that matter most for the chronology (dynasty, regime, ruler and
//! reign-title characters) are listed first so they win over the general
//! one-to-many forms.
//!
//! Each table is a pair of strings read in lockstep: the n-th character of one
//! maps to the n-th character of the other.
//!
//! [`TableConverter`]: crate::script::TableConverter

/// Simplified side of the character pairs. The first pair for a simplified
/// character decides the Simplified→Traditional direction.
pub(crate) const SIMPLIFIED: &str = concat!(
    "国学书电话语说读写听见视观开关门间问时当会应对为无从来后发动机车",
    "号业产员务经济场厂区县乡镇东风云长广远进过还运报纸记网页图画声乐",
    "艺术体爱实现梦头点线边连钱买卖价质费级类种样数统计设备处办总结组",
    "织联历认识证据论谈议选决权党军战斗胜败条规则标准厅馆楼台灯装杂难",
    "专师医药导养习练汉晋辽齐韩赵郑卫鲁吴凉陈阳满两邺临营岭阴丽陇伪蛮",
    "鲜纥仑纪宁庄灵献显顺让冲殇闵怀简贞圣庙尧汤启纣厉携静废颛顼喾谥讳",
    "逊禅继缵隐靓贵亲储摄寿终宫阁辅诸将帅节宝兴庆绪称载祯绍宪义仪万岁",
    "亿凤龙龟鸿骞华丰绥闰聪极礼骏骥鸣鹤荡钦铭镜鉴监览玺玑琼环积稳纲维",
    "缘肃荣颖诞恺俭严颜贤赐宽欢刚强锐颂顾谦谨谐谕诏赞辉轩觉誉释骑驰飞",
    "鸟鱼虽纯纬绵传录刘杨孙萧张马苏冯邓贾谢罗黄叶吕卢陆邹钟项闻赖兰尔",
    "达韦渊晔温赟构扩炽钰钧检烨颙坚铁锡锦银铜复归并迁灭乱变讨诛杀谋众",
    "队阵险随际阶领颁预题额驱驾饮辖辞迈这违迟适递邻闭阅阔隶顶贡财责货",
    "贪贫购贯贼资赏赋赠跃践轮轻辑输职罢脑苍荐获莱莲萨蓝蚕补触订训讯许",
    "访评诉诗试询该详诚误请课谁调谓谭纳纵绝给络虚虑虏麦斋粮戏岂㑩㓥㔉",
    "㖊㖞㟆㧑㧟㨫㱩㱮㲿㶉㶶㶽㺍䁖䅉䇲䌶䌷䌸䌹䌺䌼䌾䍀䍁䓕䗖䙓䜣䜧䜩䝙",
    "䞍䞐䯄䯅䲝䴓䴔䴕䴖䴗䴘䴙与丛丝丢丧个举么乌乔争于亏亘亚亩亵亸仅仆",
    "仓们优伛伞伟伣伤伥伦伧伫佣佥侠侣侥侦侧侨侩侪侬俣俦俨俩俪俫债倾偬",
    "偻偾偿傥傧傩儿兑兖兹兽冁内冈册农况冻净凄减凑凛几凫凭凯击凿刍创删",
    "别刬刭刹刽刿剀剂剐剑剥剧劝劢励劲劳势勋勚匀匦匮协单占卤卧却压厌厍",
    "厐厕厘厢厣厦厨厩厮叁参双叙叠叹叽吓吗吣吨呐呒呓呕呖呗呙呛呜咏咙咛",
    "咝咤响哑哒哓哔哕哗哙哜哝哟唛唝唠唡唢唤啧啬啭啮啰啴啸喂喷喽嗫嗳嘘",
    "嘤嘱噜嚣团园囱围囵圆圹坂坏块坛坜坝坞坟坠垄垅垆垒垦垩垫垭垱垲垴埘",
    "埙埚埯堑堕墙壮壳壶壸够夸夹夺奁奂奋奖奥妆妇妈妩妪妫姗姹娄娅娆娇娈",
    "娱娲娴婳婴婵婶媪嫒嫔嫱嬷孪宠审宾寝寻尘尝尴尸尽层屃屉届属屡屦屿岖",
    "岗岘岙岚岛岽岿峄峡峣峤峥峦崂崃崄崭嵘嵚嵝巅巩巯币帏帐帘帜带帧帮帱",
    "帻帼幂庐庑库庞廪异弃弑弥弪弯弹彦彷彻征径徕忆忏忧忾态怂怃怄怅怆怜",
    "怼怿恋恒恳恶恸恹恻恼恽悦悫悬悭悮悯惊惧惨惩惫惬惭惮惯愠愤愦愿慑懑",
    "懒懔戆戋戗戬戯户扑执扪扫扬扰抚抛抟抠抡抢护担拟拢拣拥拦拧拨择挂挚",
    "挛挜挝挞挟挠挡挢挣挤挥挦挽捝捞损捡换捣掳掴掷掸掺掼揽揾揿搀搁搂搅",
    "摅摆摇摈摊撄撑撵撷撸撺擞攒敌敛斓斩断旧旷旸昙昵昼昽晒晓晕晖暂暧朴",
    "杆杠杩杰枞枢枣枥枧枨枪枫枭柜柠柽栀栅栈栉栊栋栌栎栏树栖栾桠桡桢档",
    "桤桥桦桧桨桩梼梾梿棁棂棱椁椟椠椤椭榄榅榇榈榉槚槛槟槠横樯樱橥橱橹",
    "橼檩欤欧歼殁残殒殓殚殡殴毁毂毕毙毡毵氇气氢氩氲汇汹沟没沣沤沥沦沧",
    "沩沪泄泞泪泶泷泸泺泻泼泽泾洁洒洼浃浅浆浇浈浊测浍浏浐浑浒浓浔涂涌",
    "涛涝涞涟涠涡涣涤润涧涨涩淀渌渍渎渐渑渔渗湾湿溃溅溆滗滚滞滟滠滢滤",
    "滥滦滨滩滪漓漤潆潇潋潍潜潴澜濑濒灏灾灿炀炉炖炜炝炼烁烂烃烛烟烦烧",
    "烩烫烬热焕焖焘煴爷牍牦牵牺犊状犷犸犹狈狝狞独狭狮狯狰狱狲猃猎猕猡",
    "猪猫猬獭玚玛玮玱珐珑珰珲琏琐瑶瑷璎瓒瓮瓯畅畴疖疗疟疠疡疬疭疮疯疱",
    "疴痈痉痒痖痨痪痫瘅瘆瘗瘘瘪瘫瘾瘿癞癣癫皑皱皲盏盐盖盗盘眍眦眬着睁",
    "睐睑睾瞆瞒瞩矫矶矾矿砀码砖砗砚砜砺砻砾础硁硕硖硗硙确硷碍碛碜碱礴",
    "祃祎祢祷祸禀禄离秃秆秽秾稆税稣穑穷窃窍窎窑窜窝窥窦窭竖竞笃笋笔笕",
    "笺笼笾筑筚筛筜筝筹筼签箓箦箧箨箩箪箫篑篓篮篱簖籁籴籼粜粝粤粪糁糇",
    "紧絷纟纠纡红纤约纨纩纫纭纮纰纱纴纶纷纹纺纻纼纽纾绀绁绂绅细绉绊绋",
    "绌绎绐绑绒绔绕绖绗绘绚绛绞绠绡绢绣绤绦绨绩绫绬续绮绯绰绱绲绳绶绷",
    "绸绹绺绻综绽绾绿缀缁缂缃缄缅缆缇缈缉缊缋缌缍缎缏缑缒缓缔缕编缗缙",
    "缚缛缜缝缞缟缠缡缢缣缤缥缦缧缨缩缪缫缬缭缮缯缰缱缲缳缴罂罚罴羁羟",
    "羡翘耢耧耸耻聂聋聍聩肠肤肮肾肿胀胁胆胧胨胪胫胶脉脍脏脐脓脔脚脱脶",
    "脸腊腌腭腻腽腾膑膻臜舆舍舣舰舱舻艰艳芈芗芜芦苁苇苈苋苌苎苧苹范茎",
    "茏茑茔茕茧荆荙荚荛荜荞荟荠荤荥荦荧荨荩荪荫荬荭荮莅莳莴莶莸莹莺莼",
    "萝萤萦葱蒇蒉蒋蒌蓟蓠蓣蓥蓦蔂蔷蔹蔺蔼蕰蕲蕴薮藓蘖虫虬虮虱虾虿蚀蚁",
    "蚂蚝蚬蛊蛎蛏蛰蛱蛲蛳蛴蜕蜗蜡蝇蝈蝉蝎蝼蝾螀螨蟏衅衔衬衮袄袅袆袜袭",
    "袯裆裈裢裣裤裥褛褴觃觅觇觊觋觌觍觎觏觐觑觞觯訚誊讠讣讥讦讧讪讫讱",
    "讲讴讵讶讷讹讻讼讽诀诂诃诅诇诈诊诋诌词诎诐译诒诓诔诖诘诙诜诟诠诡",
    "诣诤诧诨诩诪诫诬诮诰诱诲诳诵诶诹诺诼诽诿谀谂谄谅谆谇谊谌谍谎谏谑",
    "谒谔谖谗谘谙谚谛谜谝谞谟谠谡谣谤谧谩谪谫谬谮谯谰谱谲谳谴谵谶豮贝",
    "负贠账贩贬贮贰贱贲贳贴贶贷贸贺贻贽贿赀赁赂赃赅赆赇赈赉赊赌赍赎赑",
    "赒赓赔赕赗赘赙赚赛赜赝赡赢赣赪赶趋趱趸跄跞跶跷跸跹跻踊踌踪踬踯蹑",
    "蹒蹰蹿躏躜躯轧轨轪轫转轭软轰轱轲轳轴轵轶轷轸轹轺轼轾轿辀辁辂较辄",
    "辆辇辈辊辋辌辍辎辏辐辒辔辕辗辘辙辚辩辫迩迳迹逦逻遗遥邝邬邮郏郐郓",
    "郦郧郸酂酝酦酱酽酾酿采銮錾钅钆钇针钉钊钋钌钍钎钏钐钑钒钓钔钕钖钗",
    "钘钙钚钛钜钝钞钠钡钢钣钤钥钨钩钪钫钬钭钮钯钲钳钴钵钶钷钸钹钺钻钼",
    "钽钾钿铀铂铃铄铅铆铇铈铉铊铋铌铍铎铏铐铑铒铓铔铕铖铗铘铙铚铛铝铞",
    "铟铠铡铢铣铤铥铦铧铨铩铪铫铬铮铯铰铱铲铳铴铵铷铸铹铺铻铼铽链铿销",
    "锁锂锃锄锅锆锇锈锉锊锋锌锍锎锏锑锒锓锔锕锖锗锘错锚锛锜锝锞锟锠锢",
    "锣锤锥锧锨锩锪锫锬锭键锯锰锱锲锳锴锵锶锷锸锹锻锼锽锾锿镀镁镂镃镄",
    "镅镆镈镉镊镋镌镍镎镏镐镑镒镓镔镕镖镗镘镙镚镛镝镞镟镠镡镢镣镤镥镦",
    "镧镨镩镪镫镬镭镮镯镰镱镲镳镴镵镶闩闪闫闬闯闱闲闳闶闷闸闹闺闼闽闾",
    "闿阀阂阃阄阆阇阈阉阊阋阌阍阎阏阐阑阒阓阕阖阗阘阙阚阛陉陕陧陨隽雏",
    "雠雳雾霁霡霭靥鞑鞒鞯韧韨韪韫韬韵顷顸须顽顿颀颃颅颇颈颉颊颋颌颍颎",
    "颏颐频颒颓颔颕颗颚颞颟颠颡颢颤颥颦颧飏飐飑飒飓飔飕飖飗飘飙飚飨餍",
    "饣饤饥饦饧饨饩饪饫饬饭饯饰饱饲饳饴饵饶饷饸饹饺饻饼饽饾饿馁馂馃馄",
    "馅馇馈馉馊馋馌馍馎馏馐馑馒馓馔馕驭驮驯驲驳驴驵驶驷驸驹驺驻驼驽驿",
    "骀骁骂骃骄骅骆骇骈骉骊骋验骍骎骐骒骓骔骕骖骗骘骙骚骛骜骝骟骠骡骢",
    "骣骤骦骧髅髋髌鬓魇魉鱽鱾鱿鲀鲂鲃鲄鲅鲆鲇鲈鲉鲊鲋鲌鲍鲎鲏鲐鲑鲒鲓",
    "鲔鲕鲖鲗鲘鲙鲚鲛鲝鲞鲟鲠鲡鲢鲣鲤鲥鲦鲧鲨鲩鲪鲫鲬鲭鲮鲯鲰鲱鲲鲳鲴",
    "鲵鲶鲷鲸鲹鲺鲻鲼鲽鲾鲿鳀鳁鳂鳃鳄鳅鳆鳇鳈鳉鳊鳋鳌鳍鳎鳏鳐鳑鳒鳓鳔",
    "鳕鳖鳗鳘鳙鳚鳛鳜鳝鳞鳟鳠鳡鳢鳣鸠鸡鸢鸤鸥鸦鸧鸨鸩鸪鸫鸬鸭鸮鸯鸰鸱",
    "鸲鸳鸴鸵鸶鸷鸸鸹鸺鸻鸼鸽鸾鹀鹁鹂鹃鹄鹅鹆鹇鹈鹉鹊鹋鹌鹍鹎鹏鹐鹑鹒",
    "鹓鹔鹕鹖鹗鹘鹙鹚鹛鹜鹝鹞鹟鹠鹡鹢鹣鹥鹦鹧鹨鹩鹪鹫鹬鹭鹯鹰鹱鹲鹳鹴",
    "鹾麸黉黡黩黪黾鼋鼍鼗鼹齑齿龀龁龂龃龄龅龆龇龈龉龊龋龌龚龛",
);

/// Traditional side of the character pairs; also read Traditional→Simplified.
pub(crate) const TRADITIONAL: &str = concat!(
    "國學書電話語說讀寫聽見視觀開關門間問時當會應對為無從來後發動機車",
    "號業產員務經濟場廠區縣鄉鎮東風雲長廣遠進過還運報紙記網頁圖畫聲樂",
    "藝術體愛實現夢頭點線邊連錢買賣價質費級類種樣數統計設備處辦總結組",
    "織聯歷認識證據論談議選決權黨軍戰鬥勝敗條規則標準廳館樓臺燈裝雜難",
    "專師醫藥導養習練漢晉遼齊韓趙鄭衛魯吳涼陳陽滿兩鄴臨營嶺陰麗隴偽蠻",
    "鮮紇崙紀寧莊靈獻顯順讓沖殤閔懷簡貞聖廟堯湯啓紂厲攜靜廢顓頊嚳諡諱",
    "遜禪繼纘隱靚貴親儲攝壽終宮閣輔諸將帥節寶興慶緒稱載禎紹憲義儀萬歲",
    "億鳳龍龜鴻騫華豐綏閏聰極禮駿驥鳴鶴蕩欽銘鏡鑒監覽璽璣瓊環積穩綱維",
    "緣肅榮穎誕愷儉嚴顏賢賜寬歡剛強銳頌顧謙謹諧諭詔贊輝軒覺譽釋騎馳飛",
    "鳥魚雖純緯綿傳錄劉楊孫蕭張馬蘇馮鄧賈謝羅黃葉呂盧陸鄒鍾項聞賴蘭爾",
    "達韋淵曄溫贇構擴熾鈺鈞檢燁顒堅鐵錫錦銀銅復歸並遷滅亂變討誅殺謀眾",
    "隊陣險隨際階領頒預題額驅駕飲轄辭邁這違遲適遞鄰閉閱闊隸頂貢財責貨",
    "貪貧購貫賊資賞賦贈躍踐輪輕輯輸職罷腦蒼薦獲萊蓮薩藍蠶補觸訂訓訊許",
    "訪評訴詩試詢該詳誠誤請課誰調謂譚納縱絕給絡虛慮虜麥齋糧戲豈儸劏劚",
    "噚喎㠏撝擓㩜殰殨瀇鸂燶煱獱瞜稏筴䊷紬縳絅䋙綐䋻繿繸薳螮襬訢譅讌貙",
    "䝼賰騧䯀䱽鳾鵁鴷鶄鶪鷈鷿與叢絲丟喪個舉麼烏喬爭於虧亙亞畝褻嚲僅僕",
    "倉們優傴傘偉俔傷倀倫傖佇傭僉俠侶僥偵側僑儈儕儂俁儔儼倆儷倈債傾傯",
    "僂僨償儻儐儺兒兌兗茲獸囅內岡冊農況凍淨淒減湊凜幾鳧憑凱擊鑿芻創刪",
    "別剗剄剎劊劌剴劑剮劍剝劇勸勱勵勁勞勢勳勩勻匭匱協單佔鹵臥卻壓厭厙",
    "龎廁釐廂厴廈廚廄廝叄參雙敘疊嘆嘰嚇嗎唚噸吶嘸囈嘔嚦唄咼嗆嗚詠嚨嚀",
    "噝吒響啞噠嘵嗶噦嘩噲嚌噥喲嘜嗊嘮啢嗩喚嘖嗇囀嚙囉嘽嘯餵噴嘍囁噯噓",
    "嚶囑嚕囂團園囪圍圇圓壙阪壞塊壇壢壩塢墳墜壟壠壚壘墾堊墊埡壋塏堖塒",
    "塤堝垵塹墮牆壯殼壺壼夠誇夾奪奩奐奮獎奧妝婦媽嫵嫗媯姍奼婁婭嬈嬌孌",
    "娛媧嫻嫿嬰嬋嬸媼嬡嬪嬙嬤孿寵審賓寢尋塵嘗尷屍盡層屓屜屆屬屢屨嶼嶇",
    "崗峴嶴嵐島崬巋嶧峽嶢嶠崢巒嶗崍嶮嶄嶸嶔嶁巔鞏巰幣幃帳簾幟帶幀幫幬",
    "幘幗冪廬廡庫龐廩異棄弒彌弳彎彈彥徬徹徵徑徠憶懺憂愾態慫憮慪悵愴憐",
    "懟懌戀恆懇惡慟懨惻惱惲悅愨懸慳悞憫驚懼慘懲憊愜慚憚慣慍憤憒願懾懣",
    "懶懍戇戔戧戩戱戶撲執捫掃揚擾撫拋摶摳掄搶護擔擬攏揀擁攔擰撥擇掛摯",
    "攣掗撾撻挾撓擋撟掙擠揮撏輓挩撈損撿換搗擄摑擲撣摻摜攬搵撳攙擱摟攪",
    "攄擺搖擯攤攖撐攆擷擼攛擻攢敵斂斕斬斷舊曠暘曇暱晝曨曬曉暈暉暫曖樸",
    "桿槓榪傑樅樞棗櫪梘棖槍楓梟櫃檸檉梔柵棧櫛櫳棟櫨櫟欄樹棲欒椏橈楨檔",
    "榿橋樺檜槳樁檮棶槤梲櫺稜槨櫝槧欏橢欖榲櫬櫚櫸檟檻檳櫧橫檣櫻櫫櫥櫓",
    "櫞檁歟歐殲歿殘殞殮殫殯毆毀轂畢斃氈毿氌氣氫氬氳匯洶溝沒灃漚瀝淪滄",
    "溈滬洩濘淚澩瀧瀘濼瀉潑澤涇潔灑窪浹淺漿澆湞濁測澮瀏滻渾滸濃潯塗湧",
    "濤澇淶漣潿渦渙滌潤澗漲澀澱淥漬瀆漸澠漁滲灣濕潰濺漵潷滾滯灧灄瀅濾",
    "濫灤濱灘澦灕灠瀠瀟瀲濰潛瀦瀾瀨瀕灝災燦煬爐燉煒熗煉爍爛烴燭煙煩燒",
    "燴燙燼熱煥燜燾熅爺牘氂牽犧犢狀獷獁猶狽獮獰獨狹獅獪猙獄猻獫獵獼玀",
    "豬貓蝟獺瑒瑪瑋瑲琺瓏璫琿璉瑣瑤璦瓔瓚甕甌暢疇癤療瘧癘瘍癧瘲瘡瘋皰",
    "痾癰痙癢瘂癆瘓癇癉瘮瘞瘻癟癱癮癭癩癬癲皚皺皸盞鹽蓋盜盤瞘眥矓著睜",
    "睞瞼睪瞶瞞矚矯磯礬礦碭碼磚硨硯碸礪礱礫礎硜碩硤磽磑確礆礙磧磣鹼礡",
    "禡禕禰禱禍稟祿離禿稈穢穠穭稅穌穡窮竊竅窵窯竄窩窺竇窶竪競篤筍筆筧",
    "箋籠籩築篳篩簹箏籌篔簽籙簀篋籜籮簞簫簣簍籃籬籪籟糴秈糶糲粵糞糝餱",
    "緊縶糹糾紆紅纖約紈纊紉紜紘紕紗紝綸紛紋紡紵紖紐紓紺紲紱紳細縐絆紼",
    "絀繹紿綁絨絝繞絰絎繪絢絳絞綆綃絹繡綌縧綈績綾緓續綺緋綽緔緄繩綬繃",
    "綢綯綹綣綜綻綰綠綴緇緙緗緘緬纜緹緲緝縕繢緦綞緞緶緱縋緩締縷編緡縉",
    "縛縟縝縫縗縞纏縭縊縑繽縹縵縲纓縮繆繅纈繚繕繒繮繾繰繯繳罌罰羆羈羥",
    "羨翹耮耬聳恥聶聾聹聵腸膚骯腎腫脹脅膽朧腖臚脛膠脈膾髒臍膿臠腳脫腡",
    "臉臘醃齶膩膃騰臏羶臢輿捨艤艦艙艫艱艷羋薌蕪蘆蓯葦藶莧萇苧薴蘋範莖",
    "蘢蔦塋煢繭荊薘莢蕘蓽蕎薈薺葷滎犖熒蕁藎蓀蔭蕒葒葤蒞蒔萵薟蕕瑩鶯蒓",
    "蘿螢縈蔥蕆蕢蔣蔞薊蘺蕷鎣驀虆薔蘞藺藹薀蘄蘊藪蘚櫱蟲虯蟣蝨蝦蠆蝕蟻",
    "螞蠔蜆蠱蠣蟶蟄蛺蟯螄蠐蛻蝸蠟蠅蟈蟬蠍螻蠑螿蟎蠨釁銜襯袞襖裊褘襪襲",
    "襏襠褌褳襝褲襇褸襤覎覓覘覬覡覿覥覦覯覲覷觴觶誾謄訁訃譏訐訌訕訖訒",
    "講謳詎訝訥訛訩訟諷訣詁訶詛詗詐診詆謅詞詘詖譯詒誆誄詿詰詼詵詬詮詭",
    "詣諍詫諢詡譸誡誣誚誥誘誨誑誦誒諏諾諑誹諉諛諗諂諒諄誶誼諶諜謊諫謔",
    "謁諤諼讒諮諳諺諦謎諞諝謨讜謖謠謗謐謾謫謭謬譖譙讕譜譎讞譴譫讖豶貝",
    "負貟賬販貶貯貳賤賁貰貼貺貸貿賀貽贄賄貲賃賂贓賅贐賕賑賚賒賭賫贖贔",
    "賙賡賠賧賵贅賻賺賽賾贋贍贏贛赬趕趨趲躉蹌躒躂蹺蹕躚躋踴躊蹤躓躑躡",
    "蹣躕躥躪躦軀軋軌軑軔轉軛軟轟軲軻轤軸軹軼軤軫轢軺軾輊轎輈輇輅較輒",
    "輛輦輩輥輞輬輟輜輳輻轀轡轅輾轆轍轔辯辮邇逕跡邐邏遺遙鄺鄔郵郟鄶鄆",
    "酈鄖鄲酇醖醱醬釅釃釀採鑾鏨釒釓釔針釘釗釙釕釷釺釧釤鈒釩釣鍆釹鍚釵",
    "鈃鈣鈈鈦鉅鈍鈔鈉鋇鋼鈑鈐鑰鎢鈎鈧鈁鈥鈄鈕鈀鉦鉗鈷鉢鈳鉕鈽鈸鉞鑽鉬",
    "鉭鉀鈿鈾鉑鈴鑠鉛鉚鉋鈰鉉鉈鉍鈮鈹鐸鉶銬銠鉺鋩錏銪鋮鋏鋣鐃銍鐺鋁銱",
    "銦鎧鍘銖銑鋌銩銛鏵銓鎩鉿銚鉻錚銫鉸銥鏟銃鐋銨銣鑄鐒鋪鋙錸鋱鏈鏗銷",
    "鎖鋰鋥鋤鍋鋯鋨鏽銼鋝鋒鋅鋶鐦鐧銻鋃鋟鋦錒錆鍺鍩錯錨錛錡鍀錁錕錩錮",
    "鑼錘錐鑕鍁錈鍃錇錟錠鍵鋸錳錙鍥鍈鍇鏘鍶鍔鍤鍬鍛鎪鍠鍰鎄鍍鎂鏤鎡鐨",
    "鎇鏌鎛鎘鑷鎲鐫鎳鎿鎦鎬鎊鎰鎵鑌鎔鏢鏜鏝鏍鏰鏞鏑鏃鏇鏐鐔鐝鐐鏷鑥鐓",
    "鑭鐠鑹鏹鐙鑊鐳鐶鐲鐮鐿鑔鑣鑞鑱鑲閂閃閆閈闖闈閒閎閌悶閘鬧閨闥閩閭",
    "闓閥閡閫鬮閬闍閾閹閶鬩閿閽閻閼闡闌闃闠闋闔闐闒闕闞闤陘陝隉隕雋雛",
    "讎靂霧霽霢靄靨韃鞽韉韌韍韙韞韜韻頃頇須頑頓頎頏顱頗頸頡頰頲頜潁熲",
    "頦頤頻頮頹頷頴顆顎顳顢顛顙顥顫顬顰顴颺颭颮颯颶颸颼颻飀飄飆飈饗饜",
    "飠飣飢飥餳飩餼飪飫飭飯餞飾飽飼飿飴餌饒餉餄餎餃餏餅餑餖餓餒餕餜餛",
    "餡餷饋餶餿饞饁饃餺餾饈饉饅饊饌饢馭馱馴馹駁驢駔駛駟駙駒騶駐駝駑驛",
    "駘驍罵駰驕驊駱駭駢驫驪騁驗騂駸騏騍騅騌驌驂騙騭騤騷騖驁騮騸驃騾驄",
    "驏驟驦驤髏髖髕鬢魘魎魛魢魷魨魴䰾魺鮁鮃鮎鱸鮋鮓鮒鮊鮑鱟鮍鮐鮭鮚鮳",
    "鮪鮞鮦鰂鮜鱠鱭鮫鮺鮝鱘鯁鱺鰱鰹鯉鰣鰷鯀鯊鯇鮶鯽鯒鯖鯪鯕鯫鯡鯤鯧鯝",
    "鯢鯰鯛鯨鰺鯴鯔鱝鰈鰏鱨鯷鰮鰃鰓鰐鰍鰒鰉鰁鱂鯿鰠鰲鰭鰨鰥鰩鰟鰜鰳鰾",
    "鱈鱉鰻鰵鱅䲁鰼鱖鱔鱗鱒鱯鱤鱧鱣鳩雞鳶鳲鷗鴉鶬鴇鴆鴣鶇鸕鴨鴞鴦鴒鴟",
    "鴝鴛鷽鴕鷥鷙鴯鴰鵂鴴鵃鴿鸞鵐鵓鸝鵑鵠鵝鵒鷳鵜鵡鵲鶓鵪鵾鵯鵬鵮鶉鶊",
    "鵷鷫鶘鶡鶚鶻鶖鷀鶥鶩鷊鷂鶲鶹鶺鷁鶼鷖鸚鷓鷚鷯鷦鷲鷸鷺鸇鷹鸌鸏鸛鸘",
    "鹺麩黌黶黷黲黽黿鼉鞀鼴齏齒齔齕齗齟齡齙齠齜齦齬齪齲齷龔龕",
);

/// Traditional variants that fold to a simplified character but are never
/// chosen by the Simplified→Traditional direction.
pub(crate) const FOLD_TRADITIONAL: &str = concat!(
    "曆裡裏誌係啟鑑衆爲併複髮鐘闢嶽閑幹眞䬗䶧佈侖侷俬俱倖倣傢僇僞僱儘",
    "兇凈剋剷劃勗勛卹厠吢咷唸喨喫噹嚐嚥嚮囍囓埰塚墻壎壜夥奬姊姦姪嫋嬀",
    "嬝孃尅崑巖廻弔彆彙彞彿悳悽慄慇慤慼慾懃懞懮捲搆搥搧搨搾摀摺撚撢擣",
    "昇曏枒榖槖樑檝檯欞欵歎歛毬氹氾汎汙沍溼滷潙濬瀋瀰燄燐燬燻燿牀牋獃",
    "瑯産痀痠瘺癒癡癥皁盃盪睏瞇瞭砲硏礮祕禦穀穫竈箇箎箝簆簷籐籤籲粧糰",
    "紮絃絛絶綉綑綫綳綵緑緻縴繫纍纔缽罈罎罣羣翫翺脣臟舖苎荳菓菸葯蒐蓆",
    "蔔蔴蕓薑藉藴藷蠧衊衚衝袴製覈託註証説謚謡譁譟譾讚豎豔貍賸贗贜跤跼",
    "踡踰蹟蹧轝迴週遊遯醞醼釦鉤銲銹鋭録錶鍊鎗鎚鎸钁関閧閲闆闇闘阨陞隄",
    "隻霑靦靷鞝韁韮頽顔颱颳餘餚餬餽饑駡鬀鬆鬍鬚鬨鬭鬱鱷鳬鷄鹹麤麯麵麽",
    "黴鼇鼈鼕齎齣齧齩",
);

/// Simplified targets of [`FOLD_TRADITIONAL`], position for position.
pub(crate) const FOLD_SIMPLIFIED: &str = concat!(
    "历里里志系启鉴众为并复发钟辟岳闲干真扬咬布仑局私具幸仿家戮伪雇尽",
    "凶净克铲划勖勋恤厕吣啕念亮吃当尝咽向禧啮采冢墙埙坛伙奖姐奸侄袅妫",
    "袅娘克昆岩回吊别汇彝佛德凄栗殷悫戚欲勤蒙忧卷构捶扇拓榨捂折捻掸捣",
    "升向丫谷橐梁楫台棂款叹敛球凼泛泛污冱湿卤沩浚沈弥焰磷毁熏耀床笺呆",
    "琅产佝酸瘘愈痴症皂杯荡困眯了炮研炮秘御谷获灶个篪钳筘檐藤签吁妆团",
    "扎弦绦绝绣捆线绷彩绿致纤系累才钵坛坛挂群玩翱唇脏铺苧豆果烟药搜席",
    "卜麻芸姜借蕴薯蠹蔑胡冲绔制核托注证说谥谣哗噪谫赞竖艳狸剩赝赃交局",
    "蜷逾迹糟舆回周游遁酝宴扣钩焊锈锐录表炼枪锤镌䦆关哄阅板暗斗厄升堤",
    "只沾腼纼绱缰韭颓颜台刮余肴糊馈饥骂剃松胡须哄斗郁鳄凫鸡咸粗曲面么",
    "霉鳌鳖冬赍出啮咬",
);

/// Phrases whose Simplified→Traditional form differs from the per-character
/// mapping. Matched longest first.
pub(crate) const TRADITIONAL_PHRASES: &[(&str, &str)] = &[
    ("皇后", "皇后"),
    ("太后", "太后"),
    ("天后", "天后"),
    ("后土", "后土"),
    ("后羿", "后羿"),
    ("大历", "大曆"),
    ("圣历", "聖曆"),
    ("宝历", "寶曆"),
    ("庆历", "慶曆"),
    ("天历", "天曆"),
    ("万历", "萬曆"),
    ("永历", "永曆"),
    ("弘历", "弘曆"),
    ("历法", "曆法"),
];

/// Iterate `(simplified, traditional)` character pairs.
pub(crate) fn char_pairs() -> impl Iterator<Item = (char, char)> {
    SIMPLIFIED.chars().zip(TRADITIONAL.chars())
}

/// Iterate `(traditional, simplified)` fold pairs.
pub(crate) fn traditional_folds() -> impl Iterator<Item = (char, char)> {
    FOLD_TRADITIONAL.chars().zip(FOLD_SIMPLIFIED.chars())
}
